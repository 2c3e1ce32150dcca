use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::bind_input;
use crate::auth::{self, LoginForm, SignupForm};
use crate::context::use_app_context;
use crate::nav::PageId;

const CARD: &str = "w-full max-w-sm rounded-[10px] bg-[#0f1724] p-6 text-white shadow-xl space-y-3";
const INPUT: &str = "w-full rounded-lg border border-white/10 bg-white/5 px-3 py-2 text-sm";
const BUTTON: &str = "w-full rounded-lg bg-[#06b6d4] px-3 py-2 text-sm font-semibold text-black";

fn auth_shell(title: &'static str, body: Html) -> Html {
    html! {
        <div class="flex min-h-screen items-center justify-center bg-background p-4">
            <div class={CARD}>
                <h1 class="text-xl font-bold">{ title }</h1>
                { body }
            </div>
        </div>
    }
}

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let ctx = use_app_context();
    let email = use_state(String::new);
    let password = use_state(String::new);

    let onsubmit = {
        let (email, password) = (email.clone(), password.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let ctx = ctx.clone();
            let form = LoginForm {
                email: (*email).clone(),
                password: (*password).clone(),
            };
            spawn_local(async move {
                if let Some(redirect) = auth::login(&ctx, &form).await {
                    redirect.perform();
                }
            });
        })
    };

    auth_shell(
        PageId::Login.title(),
        html! {
            <form class="space-y-3" {onsubmit}>
                <input id="email" type="email" class={INPUT} placeholder="Email" value={(*email).clone()} oninput={bind_input(&email)} />
                <input id="password" type="password" class={INPUT} placeholder="Password" value={(*password).clone()} oninput={bind_input(&password)} />
                <button type="submit" class={BUTTON}>{"Login"}</button>
                <div class="flex justify-between text-xs text-slate-400">
                    <a href={PageId::Signup.file()}>{"Create account"}</a>
                    <a href={PageId::ResetPassword.file()}>{"Forgot password?"}</a>
                </div>
            </form>
        },
    )
}

#[function_component(SignupPage)]
pub fn signup_page() -> Html {
    let ctx = use_app_context();
    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let confirm = use_state(String::new);

    let onsubmit = {
        let (name, email) = (name.clone(), email.clone());
        let (password, confirm) = (password.clone(), confirm.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let ctx = ctx.clone();
            let form = SignupForm {
                name: (*name).clone(),
                email: (*email).clone(),
                password: (*password).clone(),
                confirm: (*confirm).clone(),
            };
            spawn_local(async move {
                if let Some(redirect) = auth::signup(&ctx, &form).await {
                    redirect.perform();
                }
            });
        })
    };

    auth_shell(
        PageId::Signup.title(),
        html! {
            <form class="space-y-3" {onsubmit}>
                <input id="name" class={INPUT} placeholder="Full name" value={(*name).clone()} oninput={bind_input(&name)} />
                <input id="email" type="email" class={INPUT} placeholder="Email" value={(*email).clone()} oninput={bind_input(&email)} />
                <input id="password" type="password" class={INPUT} placeholder="Password" value={(*password).clone()} oninput={bind_input(&password)} />
                <input id="confirm" type="password" class={INPUT} placeholder="Confirm password" value={(*confirm).clone()} oninput={bind_input(&confirm)} />
                <button type="submit" class={BUTTON}>{"Sign up"}</button>
                <a class="block text-xs text-slate-400" href={PageId::Login.file()}>{"Already registered? Login"}</a>
            </form>
        },
    )
}

#[function_component(ResetPage)]
pub fn reset_page() -> Html {
    let ctx = use_app_context();
    let email = use_state(String::new);

    let onsubmit = {
        let email = email.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            auth::reset_password(&ctx, &email);
        })
    };

    auth_shell(
        PageId::ResetPassword.title(),
        html! {
            <form class="space-y-3" {onsubmit}>
                <input id="resetEmail" type="email" class={INPUT} placeholder="Registered email" value={(*email).clone()} oninput={bind_input(&email)} />
                <button type="submit" class={BUTTON}>{"Send reset link"}</button>
                <a class="block text-xs text-slate-400" href={PageId::Login.file()}>{"Back to login"}</a>
            </form>
        },
    )
}
