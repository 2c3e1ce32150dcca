use yew::prelude::*;

use crate::auth;
use crate::context::use_app_context;
use crate::nav::PageId;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    pub active: PageId,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="flex h-screen bg-background">
            <div class="hidden md:flex">
                <Sidebar active={props.active} />
            </div>
            <main class="flex-1 overflow-y-auto">
                { for props.children.iter() }
            </main>
        </div>
    }
}

struct NavItem {
    label: &'static str,
    page: PageId,
    icon: fn() -> Html,
}

const NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        label: "Dashboard",
        page: PageId::Dashboard,
        icon: icon_layout_grid,
    },
    NavItem {
        label: "Transactions",
        page: PageId::Transactions,
        icon: icon_credit_card,
    },
    NavItem {
        label: "Goals",
        page: PageId::Goals,
        icon: icon_target,
    },
    NavItem {
        label: "Budget",
        page: PageId::Budget,
        icon: icon_wallet,
    },
    NavItem {
        label: "Prediction",
        page: PageId::Prediction,
        icon: icon_bar_chart,
    },
];

#[derive(Properties, PartialEq)]
struct SidebarProps {
    active: PageId,
}

#[function_component(Sidebar)]
fn sidebar(props: &SidebarProps) -> Html {
    let ctx = use_app_context();
    let display_name = ctx.session.display_name();

    let on_logout = {
        let ctx = ctx.clone();
        Callback::from(move |_: MouseEvent| auth::logout(&ctx).perform())
    };

    html! {
        <div class="w-[220px] h-screen bg-[#0f1724] p-4 flex flex-col">
            <div class="px-2 mb-8">
                <span class="text-white text-2xl font-black tracking-tight">{"Finance Advisor"}</span>
                <p id="userName" class="text-xs text-slate-400 mt-1">{ display_name }</p>
            </div>

            <nav class="flex-1 space-y-2">
                { for NAV_ITEMS.iter().map(|item| {
                    let class_name = if item.page == props.active {
                        "flex items-center gap-3 px-4 py-3 rounded-xl text-[13px] font-medium bg-[#06b6d4] text-black"
                    } else {
                        "flex items-center gap-3 px-4 py-3 rounded-xl text-[13px] font-medium text-slate-300 hover:bg-white/5 hover:text-white"
                    };
                    html! {
                        <a href={item.page.file()} class={class_name}>
                            <span class="shrink-0">{ (item.icon)() }</span>
                            <span class="truncate">{ item.label }</span>
                        </a>
                    }
                }) }
            </nav>

            <button onclick={on_logout} class="flex items-center gap-3 w-full px-4 py-3 rounded-xl hover:bg-white/10 text-[13px] font-medium text-slate-300">
                { icon_log_out() }
                <span>{"Log Out"}</span>
            </button>
        </div>
    }
}

pub fn page_shell(title: &'static str, actions: Html, children: Html) -> Html {
    html! {
        <div class="p-6 max-w-7xl mx-auto">
            <div class="flex items-center justify-between pb-4 border-b border-border">
                <h1 class="text-2xl font-bold text-foreground">{ title }</h1>
                { actions }
            </div>
            <div class="pt-5 space-y-6">
                { children }
            </div>
        </div>
    }
}

fn icon_base(path: &'static str) -> Html {
    html! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d={path}></path>
        </svg>
    }
}

fn icon_layout_grid() -> Html {
    icon_base("M3 3h8v8H3zM13 3h8v8h-8zM3 13h8v8H3zM13 13h8v8h-8z")
}
pub fn icon_wallet() -> Html {
    icon_base("M3 7h18v10H3zM16 7V5H5v2")
}
pub fn icon_trending_up() -> Html {
    icon_base("M3 17l6-6 4 4 7-7")
}
pub fn icon_credit_card() -> Html {
    icon_base("M3 7h18v10H3zM3 11h18")
}
pub fn icon_target() -> Html {
    icon_base("M12 12m-9 0a9 9 0 1018 0 9 9 0 10-18 0")
}
fn icon_bar_chart() -> Html {
    icon_base("M4 20V10M10 20V4M16 20v-6M22 20H2")
}
fn icon_log_out() -> Html {
    icon_base("M9 21H5a2 2 0 01-2-2V5a2 2 0 012-2h4M16 17l5-5-5-5M21 12H9")
}
pub fn icon_plus() -> Html {
    icon_base("M12 5v14M5 12h14")
}
