use yew::prelude::*;

use super::layout::{icon_credit_card, icon_target, icon_trending_up, icon_wallet};

#[derive(Clone, Copy, PartialEq)]
pub enum StatIcon {
    Income,
    Expense,
    Saving,
    Goals,
}

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: &'static str,
    pub value: String,
    pub icon: StatIcon,
    #[prop_or_default]
    pub id: Option<&'static str>,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="bg-card p-6 rounded-[10px] shadow-sm border border-border flex justify-between items-start">
            <div>
                <p class="text-muted-foreground text-[10px] font-bold mb-1 tracking-widest uppercase">{ props.title }</p>
                <h3 id={props.id} class="text-2xl font-bold text-[#1D617A] tracking-tight">{ props.value.clone() }</h3>
            </div>
            <div class="p-3 bg-[#eef4f9] rounded-[10px]">
                {
                    match props.icon {
                        StatIcon::Income => icon_trending_up(),
                        StatIcon::Expense => icon_credit_card(),
                        StatIcon::Saving => icon_wallet(),
                        StatIcon::Goals => icon_target(),
                    }
                }
            </div>
        </div>
    }
}
