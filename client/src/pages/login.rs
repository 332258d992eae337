//! Login page with email + password authentication.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

/// Validate and normalize the email input.
fn validate_email(raw: &str) -> Result<String, &'static str> {
    let value = raw.trim();
    if value.is_empty() {
        return Err("El correo es obligatorio.");
    }
    if !looks_like_email(value) {
        return Err("Correo inválido.");
    }
    Ok(value.to_owned())
}

/// Loose shape check: local part, `@`, domain with a dot, no whitespace.
fn looks_like_email(value: &str) -> bool {
    if value.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

/// Validate the password input. No minimum length here; the server decides
/// what it accepts.
fn validate_password(raw: &str) -> Result<String, &'static str> {
    if raw.is_empty() {
        return Err("La contraseña es obligatoria.");
    }
    Ok(raw.to_owned())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let alerts = expect_context::<RwSignal<crate::state::alerts::AlertsState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = match validate_email(&email.get()) {
            Ok(v) => v,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        let password_value = match validate_password(&password.get()) {
            Ok(v) => v,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&email_value, &password_value).await {
                    Ok(user) => {
                        auth.update(|a| {
                            a.user = Some(user);
                            a.loading = false;
                        });
                        alerts.update(|a| {
                            a.show(
                                crate::state::alerts::AlertKind::Success,
                                "¡Bienvenido!",
                                "Iniciando sistema...",
                                Some(2000),
                            );
                        });
                        navigate("/dashboard", leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        info.set(e.message().to_owned());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&email_value, &password_value, &navigate, auth, alerts);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Vigía " <span class="login-card__brand-suffix">"ERP"</span></h1>
                <p class="login-card__subtitle">"Inicia sesión para continuar"</p>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-label">
                        "Correo Electrónico"
                        <input
                            class="login-input"
                            type="email"
                            placeholder="usuario@empresa.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-label">
                        "Contraseña"
                        <input
                            class="login-input"
                            type="password"
                            placeholder="••••••••"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Conectando..." } else { "Entrar" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message login-message--error">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
