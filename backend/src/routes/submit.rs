use crate::routes::imports::*;

#[axum_macros::debug_handler]
#[tracing::instrument(
    name = "Capturing a new lead",
    skip_all,
    fields(lead_email = tracing::field::Empty, lead_id = tracing::field::Empty)
)]
pub async fn submit(
    State(state): State<AppState>,
    maybe_form: Result<Json<LeadForm>, JsonRejection>,
) -> ApiResult<Json<LeadAck>> {
    let Json(form) = maybe_form?;
    let new_lead = NewLead::parse(form)?;

    tracing::Span::current().record("lead_email", &tracing::field::display(&new_lead.email));

    let lead = state.leads.record(new_lead).await;

    tracing::Span::current().record("lead_id", &tracing::field::display(&lead.id));
    tracing::info!(name = %lead.name, timestamp = %lead.timestamp, "new lead");

    Ok(Json(LeadAck::thanks()))
}

/// Answers every method the submit route doesn't accept.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
