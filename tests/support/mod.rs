#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use finance_advisor_frontend::api::{ApiClient, HttpReply, HttpRequest, ReplyFuture, Transport};
use finance_advisor_frontend::config::AppConfig;
use finance_advisor_frontend::context::AppContext;
use finance_advisor_frontend::error::TransportError;
use finance_advisor_frontend::models::User;
use finance_advisor_frontend::notify::{Notice, Notifier, ToastKind};
use finance_advisor_frontend::session::Session;
use serde_json::Value;
use yew::Callback;

pub const BASE: &str = "http://backend.test";

/// Replays canned replies in order and remembers every request.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: RefCell<VecDeque<Result<HttpReply, TransportError>>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn reply(&self, status: u16, body: Value) -> &Self {
        self.reply_raw(status, &body.to_string())
    }

    pub fn reply_raw(&self, status: u16, body: &str) -> &Self {
        self.replies.borrow_mut().push_back(Ok(HttpReply {
            status,
            body: body.to_string(),
        }));
        self
    }

    pub fn fail(&self, reason: &str) -> &Self {
        self.replies
            .borrow_mut()
            .push_back(Err(TransportError(reason.to_string())));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    /// Parsed JSON body of the `n`th request.
    pub fn body(&self, n: usize) -> Value {
        let requests = self.requests.borrow();
        let raw = requests[n].body.as_deref().expect("request has a body");
        serde_json::from_str(raw).expect("request body is JSON")
    }
}

impl Transport for ScriptedTransport {
    fn execute(&self, request: HttpRequest) -> ReplyFuture {
        self.requests.borrow_mut().push(request);
        let reply = self
            .replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("no scripted reply".to_string())));
        Box::pin(async move { reply })
    }
}

pub struct Harness {
    pub ctx: AppContext,
    pub transport: Rc<ScriptedTransport>,
    notices: Rc<RefCell<Vec<Notice>>>,
}

impl Harness {
    pub fn new() -> Self {
        let transport = Rc::new(ScriptedTransport::default());
        let notices = Rc::new(RefCell::new(Vec::new()));
        let sink = {
            let notices = notices.clone();
            Callback::from(move |notice: Notice| notices.borrow_mut().push(notice))
        };
        let ctx = AppContext::new(
            AppConfig::default(),
            ApiClient::new(BASE, transport.clone()),
            Session::in_memory(),
            Notifier::new(sink),
        );
        Self {
            ctx,
            transport,
            notices,
        }
    }

    pub fn signed_in() -> Self {
        let harness = Self::new();
        harness.ctx.session.set(&User {
            id: 7,
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
        });
        harness
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }

    pub fn last_message(&self) -> Option<String> {
        self.notices.borrow().last().map(|n| n.message.clone())
    }

    pub fn last_kind(&self) -> Option<ToastKind> {
        self.notices.borrow().last().map(|n| n.kind)
    }
}
