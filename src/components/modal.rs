use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub title: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or(420)]
    pub width: u32,
    pub children: Children,
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_close_button = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="fixed inset-0 z-[9998] flex items-center justify-center bg-black/45" onclick={on_backdrop}>
            <div
                class="max-w-[calc(100%-32px)] rounded-[10px] bg-[#0f1724] p-4 text-white shadow-2xl"
                style={format!("width:{}px", props.width)}
                onclick={stop}
            >
                <div class="mb-2 font-bold">{ props.title.clone() }</div>
                <div>{ for props.children.iter() }</div>
                <button class="mt-3 rounded-lg border border-white/10 px-3 py-2" onclick={on_close_button}>{"Close"}</button>
            </div>
        </div>
    }
}
