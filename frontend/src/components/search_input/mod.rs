//! Text input with suggestions, backed by a native `<datalist>`.
//!
//! Free text is accepted: suggestions only help the user type an exact name,
//! since the pages match names verbatim.

use uuid::Uuid;
use yew::prelude::*;

use super::helpers::input_value;

#[derive(Properties, PartialEq, Clone)]
pub struct SearchInputProps {
    pub label: AttrValue,
    pub value: String,
    #[prop_or_default]
    pub options: Vec<String>,
    #[prop_or_default]
    pub disabled: bool,
    /// Report only committed values (datalist pick, Enter or blur) instead
    /// of every keystroke. Used where a value triggers a request.
    #[prop_or_default]
    pub commit_on_change: bool,
    pub on_value: Callback<String>,
}

pub struct SearchInput {
    list_id: String,
}

impl Component for SearchInput {
    type Message = ();
    type Properties = SearchInputProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            list_id: format!("options-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_value = props.on_value.clone();

        let (oninput, onchange) = if props.commit_on_change {
            let onchange = Callback::from(move |e: Event| on_value.emit(input_value(&e)));
            (None, Some(onchange))
        } else {
            let oninput = Callback::from(move |e: InputEvent| on_value.emit(input_value(&e)));
            (Some(oninput), None)
        };

        html! {
            <label class="search-input">
                <span class="search-input-label">{ props.label.clone() }</span>
                <input
                    type="text"
                    list={self.list_id.clone()}
                    value={props.value.clone()}
                    disabled={props.disabled}
                    {oninput}
                    {onchange}
                />
                <datalist id={self.list_id.clone()}>
                    { for props.options.iter().map(|option| html! { <option value={option.clone()} /> }) }
                </datalist>
            </label>
        }
    }
}
