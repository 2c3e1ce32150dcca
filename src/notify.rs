use std::rc::Rc;

use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub kind: ToastKind,
    pub message: String,
    pub timeout_ms: Option<u32>,
}

#[derive(Clone, PartialEq)]
pub struct Notifier {
    sink: Callback<Notice>,
}

impl Notifier {
    pub fn new(sink: Callback<Notice>) -> Self {
        Self { sink }
    }

    /// A notifier with no surface; notices only reach the log.
    pub fn detached() -> Self {
        Self::new(Callback::from(|notice: Notice| {
            log::info!("[{:?}] {}", notice.kind, notice.message)
        }))
    }

    pub fn notify(&self, kind: ToastKind, message: impl Into<String>) {
        self.sink.emit(Notice {
            kind,
            message: message.into(),
            timeout_ms: None,
        });
    }

    pub fn info(&self, message: impl Into<String>) {
        self.notify(ToastKind::Info, message);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(ToastKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(ToastKind::Error, message);
    }

    pub fn info_for(&self, message: impl Into<String>, timeout_ms: u32) {
        self.sink.emit(Notice {
            kind: ToastKind::Info,
            message: message.into(),
            timeout_ms: Some(timeout_ms),
        });
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub notice: Notice,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastStack {
    next_id: u32,
    pub toasts: Vec<Toast>,
}

pub enum ToastAction {
    Push(Notice),
    Dismiss(u32),
}

impl Reducible for ToastStack {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(notice) => {
                next.toasts.push(Toast {
                    id: next.next_id,
                    notice,
                });
                next.next_id = next.next_id.wrapping_add(1);
            }
            ToastAction::Dismiss(id) => next.toasts.retain(|t| t.id != id),
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn notifier_forwards_to_sink() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let notifier = {
            let seen = seen.clone();
            Notifier::new(Callback::from(move |n: Notice| seen.borrow_mut().push(n)))
        };
        notifier.error("Server not reachable");
        notifier.info_for("later", 3500);

        let seen = seen.borrow();
        assert_eq!(seen[0].kind, ToastKind::Error);
        assert_eq!(seen[0].message, "Server not reachable");
        assert_eq!(seen[1].timeout_ms, Some(3500));
    }

    #[test]
    fn stack_assigns_ids_and_dismisses() {
        let notice = Notice {
            kind: ToastKind::Info,
            message: "hi".into(),
            timeout_ms: None,
        };
        let stack = Rc::new(ToastStack::default())
            .reduce(ToastAction::Push(notice.clone()))
            .reduce(ToastAction::Push(notice));
        assert_eq!(
            stack.toasts.iter().map(|t| t.id).collect::<Vec<_>>(),
            vec![0, 1]
        );
        let stack = stack.reduce(ToastAction::Dismiss(0));
        assert_eq!(stack.toasts.len(), 1);
        assert_eq!(stack.toasts[0].id, 1);
    }
}
