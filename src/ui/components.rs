/// Reusable UI components for the snippet list

use crate::render::{GroupBlock, SnippetKey, SnippetRow};
use patternfly_yew::prelude::*;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GroupHeaderProps {
    pub block: GroupBlock,
    pub on_delete_group: Callback<String>,
}

#[function_component(GroupHeader)]
pub fn group_header(props: &GroupHeaderProps) -> Html {
    let block = &props.block;

    html! {
        <div class="group-header">
            <h3 class="group-title">
                {format!("{} ({})", block.label, block.rows.len())}
            </h3>
            if block.deletable {
                <Button
                    onclick={props.on_delete_group.reform({
                        let name = block.name.clone();
                        move |_| name.clone()
                    })}
                    variant={ButtonVariant::Plain}
                >
                    {"🗑️"}
                </Button>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SnippetItemProps {
    pub row: SnippetRow,
    #[prop_or(false)]
    pub copied: bool,
    pub on_copy: Callback<SnippetRow>,
    pub on_delete: Callback<SnippetKey>,
}

#[function_component(SnippetItem)]
pub fn snippet_item(props: &SnippetItemProps) -> Html {
    let on_copy = props.on_copy.reform({
        let row = props.row.clone();
        move |_: MouseEvent| row.clone()
    });

    // Deleting must not also trigger the row's copy handler
    let on_delete = props.on_delete.reform({
        let key = props.row.key.clone();
        move |e: MouseEvent| {
            e.stop_propagation();
            key.clone()
        }
    });

    html! {
        <div class={classes!("snippet-item", props.copied.then_some("copied"))} onclick={on_copy}>
            <span class="snippet-text">{&props.row.text}</span>
            <Button onclick={on_delete} variant={ButtonVariant::Plain}>
                {"✗"}
            </Button>
        </div>
    }
}
