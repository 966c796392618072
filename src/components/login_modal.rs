//! Login Modal Component
//!
//! Sign in / sign up dialog. Opened from the home page navbar and hero.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::forms::{AuthForm, AuthMode};

#[component]
pub fn LoginModal() -> impl IntoView {
    let ctx = use_app_context();
    let (form, set_form) = signal(AuthForm::default());
    let (error, set_error) = signal(Option::<String>::None);
    let (show_password, set_show_password) = signal(false);

    let close = move || {
        set_form.set(AuthForm::default());
        set_error.set(None);
        set_show_password.set(false);
        ctx.close_login();
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mode = ctx.login_mode.get_untracked();
        let mut current = form.get_untracked();
        match current.submit(mode) {
            Ok(()) => close(),
            Err(err) => {
                log::warn!("[AUTH] {}", err);
                set_error.set(Some(err.to_string()));
            }
        }
    };

    let switch_mode = move |_| {
        set_error.set(None);
        ctx.set_login_mode(ctx.login_mode.get_untracked().toggled());
    };

    view! {
        <Show when=move || ctx.login_open.get()>
            <div class="modal-backdrop" on:click=move |_| close()>
                <div class="modal-panel" on:click=|ev| ev.stop_propagation()>
                    <button class="modal-close" title="Close" on:click=move |_| close()>"×"</button>
                    <h2 class="modal-heading">{move || ctx.login_mode.get().heading()}</h2>

                    <form class="modal-form" on:submit=on_submit>
                        <Show when=move || { ctx.login_mode.get() == AuthMode::SignUp }>
                            <input
                                type="text"
                                placeholder="Full name"
                                prop:value=move || form.get().name
                                on:input=move |ev| set_form.update(|f| f.name = event_target_value(&ev))
                            />
                        </Show>
                        <input
                            type="email"
                            placeholder="Email address"
                            prop:value=move || form.get().email
                            on:input=move |ev| set_form.update(|f| f.email = event_target_value(&ev))
                        />
                        <div class="password-field">
                            <input
                                type=move || if show_password.get() { "text" } else { "password" }
                                placeholder="Password"
                                prop:value=move || form.get().password
                                on:input=move |ev| set_form.update(|f| f.password = event_target_value(&ev))
                            />
                            <button
                                type="button"
                                class="password-toggle"
                                title=move || if show_password.get() { "Hide password" } else { "Show password" }
                                on:click=move |_| set_show_password.update(|v| *v = !*v)
                            >
                                {move || if show_password.get() { "🙈" } else { "👁" }}
                            </button>
                        </div>
                        {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
                        <button type="submit" class="modal-submit">
                            {move || ctx.login_mode.get().submit_label()}
                        </button>
                    </form>

                    <p class="modal-switch">
                        {move || ctx.login_mode.get().switch_prompt().0}
                        " "
                        <button type="button" class="link-btn" on:click=switch_mode>
                            {move || ctx.login_mode.get().switch_prompt().1}
                        </button>
                    </p>
                </div>
            </div>
        </Show>
    }
}
