use yew::prelude::*;

use crate::components::{Layout, ToastHost};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::nav::{self, PageId, Renderer, Route};
use crate::notify::{Notice, Notifier, ToastAction, ToastStack};
use crate::pages::{
    BudgetPage, DashboardPage, GoalsPage, LoginPage, PredictionPage, ResetPage, SignupPage,
    TransactionsPage,
};
use crate::refresh::{Generations, RefreshHandle};

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: AppConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let toasts = use_reducer(ToastStack::default);
    let generations = use_reducer(Generations::default);
    let ctx = {
        let dispatcher = toasts.dispatcher();
        let config = props.config.clone();
        use_state(move || {
            let notifier = Notifier::new(Callback::from(move |notice: Notice| {
                dispatcher.dispatch(ToastAction::Push(notice))
            }));
            AppContext::browser(config, notifier)
        })
    };
    let route = use_memo(|_| nav::resolve(&nav::current_path()), ());

    let content = match &*route {
        Route::Auth(PageId::Signup) => html! { <SignupPage /> },
        Route::Auth(PageId::ResetPassword) => html! { <ResetPage /> },
        Route::Auth(_) => html! { <LoginPage /> },
        Route::App(renderers) => {
            let active = renderers
                .first()
                .map_or(PageId::Dashboard, Renderer::page);
            html! {
                <Layout {active}>
                    { for renderers.iter().map(render) }
                </Layout>
            }
        }
        Route::Unknown => {
            log::debug!("no view for {}", nav::current_path());
            Html::default()
        }
    };

    html! {
        <ContextProvider<AppContext> context={(*ctx).clone()}>
            <ContextProvider<RefreshHandle> context={generations}>
                { content }
                <ToastHost stack={toasts} default_timeout_ms={ctx.config.toast_timeout_ms} />
            </ContextProvider<RefreshHandle>>
        </ContextProvider<AppContext>>
    }
}

fn render(renderer: &Renderer) -> Html {
    match renderer {
        Renderer::Dashboard => html! { <DashboardPage /> },
        Renderer::Transactions => html! { <TransactionsPage /> },
        Renderer::Goals => html! { <GoalsPage /> },
        Renderer::Prediction => html! { <PredictionPage /> },
        Renderer::Budget => html! { <BudgetPage /> },
    }
}
