use std::rc::Rc;

use yew::prelude::*;

/// One counter per view; a view reloads whenever its counter moves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Generations {
    pub transactions: u32,
    pub goals: u32,
    pub budget: u32,
    pub dashboard: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefreshAction {
    Transactions,
    Goals,
    Budget,
    Dashboard,
    /// After a new transaction: the list, the dashboard and the budget.
    AfterTransaction,
    AfterGoalChange,
}

impl Reducible for Generations {
    type Action = RefreshAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        let bump = |n: &mut u32| *n = n.wrapping_add(1);
        match action {
            RefreshAction::Transactions => bump(&mut next.transactions),
            RefreshAction::Goals => bump(&mut next.goals),
            RefreshAction::Budget => bump(&mut next.budget),
            RefreshAction::Dashboard => {
                bump(&mut next.dashboard);
                bump(&mut next.budget);
            }
            RefreshAction::AfterTransaction => {
                bump(&mut next.transactions);
                bump(&mut next.dashboard);
                bump(&mut next.budget);
            }
            RefreshAction::AfterGoalChange => {
                bump(&mut next.goals);
                bump(&mut next.dashboard);
                bump(&mut next.budget);
            }
        }
        Rc::new(next)
    }
}

pub type RefreshHandle = UseReducerHandle<Generations>;

#[hook]
pub fn use_refresh() -> Option<RefreshHandle> {
    use_context::<RefreshHandle>()
}
