use std::rc::Rc;

use yew::prelude::*;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::error::{ApiError, ValidationError};
use crate::models::UserId;
use crate::nav::{PageId, Redirect};
use crate::notify::Notifier;
use crate::session::Session;

#[derive(Clone, PartialEq)]
pub struct AppContext {
    pub config: Rc<AppConfig>,
    pub api: ApiClient,
    pub session: Session,
    pub notifier: Notifier,
}

impl AppContext {
    pub fn new(config: AppConfig, api: ApiClient, session: Session, notifier: Notifier) -> Self {
        Self {
            config: Rc::new(config),
            api,
            session,
            notifier,
        }
    }

    pub fn browser(config: AppConfig, notifier: Notifier) -> Self {
        let api = ApiClient::fetch(&config.api_base_url);
        Self::new(config, api, Session::browser(), notifier)
    }

    pub fn report(&self, err: &ApiError, fallback: &str) {
        self.notifier.error(err.user_message(fallback));
    }

    /// List loads name what failed instead of echoing the server.
    pub fn report_fetch(&self, err: &ApiError, fallback: &str) {
        if err.is_transport() {
            self.report(err, fallback);
        } else {
            self.notifier.error(fallback);
        }
    }

    pub fn reject(&self, err: ValidationError) -> Outcome {
        self.notifier.error(err.to_string());
        Outcome::Invalid
    }

    pub fn require_user(&self) -> Result<UserId, Outcome> {
        match self.session.user_id() {
            Some(id) => Ok(id),
            None => {
                self.notifier.error("Please login");
                Err(Outcome::NeedsLogin(Redirect::now(PageId::Login)))
            }
        }
    }

    pub fn currency(&self, value: f64) -> String {
        crate::format::format_currency(value, self.config.currency_symbol)
    }
}

/// How a mutating operation ended; the view decides what to do next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Done,
    Invalid,
    Failed,
    NeedsLogin(Redirect),
}

impl Outcome {
    pub fn is_done(&self) -> bool {
        matches!(self, Outcome::Done)
    }

    pub fn follow(self) -> Self {
        if let Outcome::NeedsLogin(redirect) = self {
            redirect.perform();
        }
        self
    }
}

#[hook]
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().unwrap_or_else(|| {
        log::warn!("component mounted outside the app context");
        AppContext::browser(AppConfig::from_env(), Notifier::detached())
    })
}
