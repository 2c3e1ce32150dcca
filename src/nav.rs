#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageId {
    Login,
    Signup,
    ResetPassword,
    Dashboard,
    Transactions,
    Goals,
    Prediction,
    Budget,
}

impl PageId {
    pub fn file(&self) -> &'static str {
        match self {
            PageId::Login => "index.html",
            PageId::Signup => "signup.html",
            PageId::ResetPassword => "reset.html",
            PageId::Dashboard => "dashboard.html",
            PageId::Transactions => "transactions.html",
            PageId::Goals => "goals.html",
            PageId::Prediction => "prediction.html",
            PageId::Budget => "budget.html",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            PageId::Login => "Login",
            PageId::Signup => "Sign up",
            PageId::ResetPassword => "Reset password",
            PageId::Dashboard => "Dashboard",
            PageId::Transactions => "Transactions",
            PageId::Goals => "Goals",
            PageId::Prediction => "Prediction",
            PageId::Budget => "Budget",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Renderer {
    Dashboard,
    Transactions,
    Goals,
    Prediction,
    Budget,
}

impl Renderer {
    pub fn page(&self) -> PageId {
        match self {
            Renderer::Dashboard => PageId::Dashboard,
            Renderer::Transactions => PageId::Transactions,
            Renderer::Goals => PageId::Goals,
            Renderer::Prediction => PageId::Prediction,
            Renderer::Budget => PageId::Budget,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Auth(PageId),
    App(Vec<Renderer>),
    Unknown,
}

const RENDERERS: [(&str, Renderer); 5] = [
    ("dashboard", Renderer::Dashboard),
    ("transactions", Renderer::Transactions),
    ("goals", Renderer::Goals),
    ("prediction", Renderer::Prediction),
    ("budget", Renderer::Budget),
];

pub fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or("")
}

/// Maps `location.pathname` to what should be mounted. A segment can name more
/// than one renderer; they are mounted in the fixed order above.
pub fn resolve(path: &str) -> Route {
    let segment = last_segment(path);
    if segment.is_empty() || segment == "index.html" {
        return Route::Auth(PageId::Login);
    }
    if segment.contains("signup") {
        return Route::Auth(PageId::Signup);
    }
    if segment.contains("reset") || segment.contains("forgot") {
        return Route::Auth(PageId::ResetPassword);
    }

    let renderers: Vec<Renderer> = RENDERERS
        .iter()
        .filter(|(needle, _)| segment.contains(needle))
        .map(|(_, renderer)| *renderer)
        .collect();
    if renderers.is_empty() {
        Route::Unknown
    } else {
        Route::App(renderers)
    }
}

pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Redirect {
    pub to: PageId,
    pub after_ms: u32,
}

impl Redirect {
    pub fn now(to: PageId) -> Self {
        Self { to, after_ms: 0 }
    }

    pub fn perform(self) {
        let target = self.to.file();
        let go = move || match web_sys::window() {
            Some(window) => {
                if let Err(err) = window.location().set_href(target) {
                    log::error!("navigation to {} failed: {:?}", target, err);
                }
            }
            None => log::error!("no window to navigate to {}", target),
        };
        if self.after_ms == 0 {
            go();
        } else {
            gloo_timers::callback::Timeout::new(self.after_ms, go).forget();
        }
    }
}
