use log::{info, warn};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::notification::{Toast, ToastMessage};
use crate::components::section_heading::SectionHeading;
use crate::effects::{reveal_class, use_reveal};
use crate::registration::{
    Experience, Field, FieldUpdate, RegistrationMachine, SubmitOutcome, TeamStatus,
};

const TOAST_MS: u32 = 5000;

fn field_error(machine: &RegistrationMachine, field: Field) -> Html {
    match machine.error(field) {
        Some(error) => html! { <p class="field-error">{error.to_string()}</p> },
        None => html! {},
    }
}

#[function_component(Registration)]
pub fn registration() -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone());
    let machine = use_state(RegistrationMachine::new);
    let toast = use_state(|| None::<ToastMessage>);
    let toast_id = use_mut_ref(|| 0u32);

    let update = {
        let machine = machine.clone();
        Callback::from(move |update: FieldUpdate| {
            let mut next = (*machine).clone();
            next.apply(update);
            machine.set(next);
        })
    };

    let onsubmit = {
        let machine = machine.clone();
        let toast = toast.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*machine).clone();
            match next.submit() {
                SubmitOutcome::Accepted(summary) => {
                    match serde_json::to_string(&summary) {
                        Ok(json) => info!("Registration submitted: {}", json),
                        Err(e) => warn!("Could not serialize registration summary: {}", e),
                    }
                    let id = {
                        let mut counter = toast_id.borrow_mut();
                        *counter += 1;
                        *counter
                    };
                    toast.set(Some(ToastMessage {
                        id,
                        title: "Registration Successful!".into(),
                        description: "Get ready for a mysterious coding adventure.".into(),
                        duration_ms: TOAST_MS,
                    }));
                }
                SubmitOutcome::Rejected(errors) => {
                    info!("Registration rejected with {} field errors", errors.len());
                }
            }
            machine.set(next);
        })
    };

    let on_dismiss = {
        let toast = toast.clone();
        Callback::from(move |_: ()| toast.set(None))
    };

    let form = machine.form();

    html! {
        <section id="register" ref={node} class={classes!("section", reveal_class(visible))}>
            <style>
                {r#"
                    .register-form {
                        max-width: 640px;
                        margin: 0 auto;
                        padding: 32px;
                        border-radius: 16px;
                        background: rgba(15, 20, 35, 0.8);
                        border: 1px solid rgba(249, 183, 43, 0.25);
                    }
                    .form-group {
                        margin-bottom: 20px;
                    }
                    .form-group label {
                        display: block;
                        margin-bottom: 6px;
                        color: rgba(255, 255, 255, 0.85);
                    }
                    .form-group input[type="text"],
                    .form-group input[type="email"],
                    .form-group select,
                    .form-group textarea {
                        width: 100%;
                        box-sizing: border-box;
                        padding: 10px 12px;
                        border-radius: 8px;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        background: rgba(0, 0, 0, 0.4);
                        color: #fff;
                        font-size: 1rem;
                    }
                    .form-group .has-error {
                        border-color: #ff4d6d;
                    }
                    .field-error {
                        margin: 6px 0 0;
                        color: #ff4d6d;
                        font-size: 0.85rem;
                    }
                    .radio-row {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 16px;
                    }
                    .checkbox-row {
                        display: flex;
                        gap: 8px;
                        align-items: center;
                    }
                "#}
            </style>
            <div class="section-inner">
                <SectionHeading
                    title="Register Now"
                    subtitle="Sign the journal and join the investigation."
                />
                <form class="register-form" {onsubmit} novalidate={true}>
                    <div class="form-group">
                        <label for="reg-name">{"Full Name"}</label>
                        <input
                            id="reg-name"
                            type="text"
                            placeholder="Dipper Pines"
                            class={classes!(machine.error(Field::Name).is_some().then_some("has-error"))}
                            value={form.name.clone()}
                            oninput={update.reform(|e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                FieldUpdate::Name(input.value())
                            })}
                        />
                        { field_error(&machine, Field::Name) }
                    </div>
                    <div class="form-group">
                        <label for="reg-email">{"Email"}</label>
                        <input
                            id="reg-email"
                            type="email"
                            placeholder="dipper@mysteryshack.com"
                            class={classes!(machine.error(Field::Email).is_some().then_some("has-error"))}
                            value={form.email.clone()}
                            oninput={update.reform(|e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                FieldUpdate::Email(input.value())
                            })}
                        />
                        { field_error(&machine, Field::Email) }
                    </div>
                    <div class="form-group">
                        <label for="reg-experience">{"Experience Level"}</label>
                        <select
                            id="reg-experience"
                            class={classes!(machine.error(Field::Experience).is_some().then_some("has-error"))}
                            onchange={update.reform(|e: Event| {
                                let select: HtmlSelectElement = e.target_unchecked_into();
                                FieldUpdate::Experience(Experience::from_value(&select.value()))
                            })}
                        >
                            <option value="" selected={form.experience.is_none()}>{"Select your experience"}</option>
                            { for Experience::ALL.iter().map(|level| html! {
                                <option
                                    value={level.value()}
                                    selected={form.experience == Some(*level)}
                                >
                                    {level.label()}
                                </option>
                            }) }
                        </select>
                        { field_error(&machine, Field::Experience) }
                    </div>
                    <div class="form-group">
                        <label for="reg-interests">{"Areas of Interest"}</label>
                        <textarea
                            id="reg-interests"
                            rows="3"
                            placeholder="Cryptography, AI, the paranormal..."
                            value={form.interests.clone()}
                            oninput={update.reform(|e: InputEvent| {
                                let input: HtmlTextAreaElement = e.target_unchecked_into();
                                FieldUpdate::Interests(input.value())
                            })}
                        />
                    </div>
                    <div class="form-group">
                        <label>{"Team Status"}</label>
                        <div class="radio-row">
                            { for TeamStatus::ALL.iter().map(|status| {
                                let status = *status;
                                html! {
                                    <label>
                                        <input
                                            type="radio"
                                            name="team-status"
                                            value={status.value()}
                                            checked={form.team_status == status}
                                            onchange={update.reform(move |_: Event| FieldUpdate::TeamStatus(status))}
                                        />
                                        {" "}{status.label()}
                                    </label>
                                }
                            }) }
                        </div>
                    </div>
                    <div class="form-group">
                        <label class="checkbox-row">
                            <input
                                type="checkbox"
                                checked={form.agreed_to_terms}
                                onchange={update.reform(|e: Event| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    FieldUpdate::AgreedToTerms(input.checked())
                                })}
                            />
                            {"I agree to the terms and conditions and the code of conduct"}
                        </label>
                        { field_error(&machine, Field::Terms) }
                    </div>
                    <button type="submit" class="btn btn-primary">{"Register for HexaFalls"}</button>
                </form>
            </div>
            {
                if let Some(message) = (*toast).clone() {
                    html! { <Toast {message} {on_dismiss} /> }
                } else {
                    html! {}
                }
            }
        </section>
    }
}
