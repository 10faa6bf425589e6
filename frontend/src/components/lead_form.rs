use crate::components::imports::*;
use interfacing::{ErrorBody, LeadAck, LeadForm};

#[derive(Clone, Debug, PartialEq)]
enum Status {
    Idle,
    Sending,
    Sent(String),
    Failed(String),
}

#[derive(thiserror::Error, Debug)]
enum SubmitError {
    #[error("Request error")]
    RequestError(#[source] gloo_net::Error),

    #[error("{0}")]
    Rejected(String),

    #[error("Parse error")]
    ParseError(#[source] gloo_net::Error),
}

async fn submit_lead(form: &LeadForm) -> Result<LeadAck, SubmitError> {
    let response = Request::static_post(routes().api.submit)
        .json(form)
        .map_err(SubmitError::RequestError)?
        .send()
        .await
        .map_err(SubmitError::RequestError)?;
    response.log_status();

    if !response.ok() {
        let body = response
            .json::<ErrorBody>()
            .await
            .map_err(SubmitError::ParseError)?;
        return Err(SubmitError::Rejected(body.error));
    }

    response
        .json::<LeadAck>()
        .await
        .map_err(SubmitError::ParseError)
}

fn non_empty(value: String) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_owned())
}

#[styled_component]
pub fn LeadCapture() -> Html {
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let message_ref = use_node_ref();
    let status = use_state(|| Status::Idle);

    let onsubmit = {
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let message_ref = message_ref.clone();
        let status = status.clone();

        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let value_of = |node: &NodeRef| {
                node.cast::<HtmlInputElement>()
                    .and_then(|input| non_empty(input.value()))
            };
            let message = message_ref
                .cast::<web_sys::HtmlTextAreaElement>()
                .and_then(|input| non_empty(input.value()));

            let form = LeadForm {
                name: value_of(&name_ref),
                email: value_of(&email_ref),
                message,
            };

            let status = status.clone();
            status.set(Status::Sending);
            wasm_bindgen_futures::spawn_local(async move {
                match submit_lead(&form).await {
                    Ok(ack) => status.set(Status::Sent(ack.message)),
                    Err(e) => {
                        tracing::warn!(error = %e, "lead submission failed");
                        status.set(Status::Failed(e.to_string()));
                    }
                }
            });
        })
    };

    let form_style = css!(
        "
            display: flex;
            flex-direction: column;
            gap: var(--space-md);
            max-width: 32em;

            input, textarea {
                padding: var(--space-sm) var(--space-md);
                border-radius: var(--radius-md);
                border: 1px solid var(--color-text);
                background: transparent;
                color: var(--color-text);
                font-family: var(--font-mono);
                backdrop-filter: blur(var(--blur-amount));
            }

            .status-failed {
                color: #ff5050;
            }
        "
    );

    let feedback = match &*status {
        Status::Idle => html! {},
        Status::Sending => html! { <p>{ "Sending…" }</p> },
        Status::Sent(message) => html! { <p class="status-sent">{ message }</p> },
        Status::Failed(message) => html! { <p class="status-failed">{ message }</p> },
    };

    html! {
        <form {onsubmit} class={ form_style }>
            <input ref={name_ref} type="text" placeholder="Name" name="name"/>
            <input ref={email_ref} type="email" placeholder="Email" name="email"/>
            <textarea ref={message_ref} placeholder="What are you building?" name="message"/>
            <button type="submit" disabled={ *status == Status::Sending }>{ "Get in touch" }</button>
            { feedback }
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_inputs_are_omitted() {
        assert_eq!(non_empty("   ".into()), None);
        assert_eq!(non_empty(" ada@example.com ".into()).as_deref(), Some("ada@example.com"));
    }
}
