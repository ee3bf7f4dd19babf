use uuid::Uuid;
use yew::{classes, html, Component, Context, Html, Properties};

/// Expandable section with a bold summary line.
///
/// Collapsed by default; the header toggles the body. Nested accordions keep
/// their own state, so collapsing a parent does not reset its children.
pub struct YwMaterialAccordion {
    pub id: String,
    pub expanded: bool,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: String,
    #[prop_or_default]
    pub flat: bool,
    #[prop_or_default]
    pub children: Html,
}

pub enum Msg {
    Toggle,
}

impl Component for YwMaterialAccordion {
    type Message = Msg;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("accordion-{}", Uuid::new_v4()),
            expanded: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Toggle => {
                self.expanded = !self.expanded;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let panel_id = format!("{}-panel", self.id);

        html! {
            <div class={classes!("accordion", props.flat.then_some("flat"), self.expanded.then_some("expanded"))}>
                <button
                    class="accordion-summary"
                    aria-expanded={self.expanded.to_string()}
                    aria-controls={panel_id.clone()}
                    onclick={ctx.link().callback(|_| Msg::Toggle)}
                >
                    <span class="accordion-title">{ props.title.clone() }</span>
                    <i class="material-icons">{ if self.expanded { "expand_less" } else { "expand_more" } }</i>
                </button>
                {
                    if self.expanded {
                        html! {
                            <div class="accordion-details" id={panel_id}>
                                { props.children.clone() }
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        }
    }
}
