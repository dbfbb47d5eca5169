use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub title: AttrValue,
    pub signed_in: bool,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="header">
            <div class="container">
                <h1>{props.title.clone()}</h1>
                <div class="header-right">
                    <span class={classes!("session-status", props.signed_in.then_some("signed-in"))}>
                        {if props.signed_in { "Signed in" } else { "Not signed in" }}
                    </span>
                </div>
            </div>
        </header>
    }
}
