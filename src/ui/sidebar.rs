/// Sidebar panel: add form plus the grouped snippet list

use crate::config::SidebarConfig;
use crate::host::{BrowserClipboard, ChromeStore, SnippetView};
use crate::manager::{Mutation, SnippetManager};
use crate::render::{SnippetKey, SnippetList, SnippetRow};
use crate::ui::components::{GroupHeader, SnippetItem};
use patternfly_yew::prelude::*;
use std::collections::HashSet;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::functional::{UseReducerDispatcher, UseStateSetter};
use yew::prelude::*;

type SidebarManager = SnippetManager<ChromeStore, BrowserClipboard, SidebarView>;

/// Rows currently showing the copied marker
#[derive(Default, PartialEq)]
struct CopiedRows(HashSet<SnippetKey>);

enum CopiedAction {
    Mark(SnippetKey),
    Clear(SnippetKey),
    Reset,
}

impl Reducible for CopiedRows {
    type Action = CopiedAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut rows = self.0.clone();
        match action {
            CopiedAction::Mark(key) => {
                rows.insert(key);
            }
            CopiedAction::Clear(key) => {
                rows.remove(&key);
            }
            CopiedAction::Reset => rows.clear(),
        }
        Rc::new(CopiedRows(rows))
    }
}

/// UI handles the manager renders into
#[derive(Clone)]
pub struct SidebarView {
    list: UseStateSetter<SnippetList>,
    copied: UseReducerDispatcher<CopiedRows>,
}

impl SnippetView for SidebarView {
    fn show(&self, list: SnippetList) {
        // Row positions from the previous render no longer identify the same snippets
        self.copied.dispatch(CopiedAction::Reset);
        self.list.set(list);
    }

    fn flash_copied(&self, key: &SnippetKey, duration_ms: u32) {
        self.copied.dispatch(CopiedAction::Mark(key.clone()));

        let copied = self.copied.clone();
        let key = key.clone();
        spawn_local(async move {
            sleep(duration_ms).await;
            copied.dispatch(CopiedAction::Clear(key));
        });
    }
}

#[derive(Properties, PartialEq, Default)]
pub struct SidebarProps {
    #[prop_or_default]
    pub config: SidebarConfig,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let list = use_state(|| SnippetList::Loading);
    let copied = use_reducer(CopiedRows::default);
    let snippet_ref = use_node_ref();
    let group_ref = use_node_ref();

    let manager: Rc<SidebarManager> = {
        let view = SidebarView {
            list: list.setter(),
            copied: copied.dispatcher(),
        };
        use_memo(props.config.clone(), move |config| {
            SnippetManager::new(
                ChromeStore::new(config.storage_key.clone()),
                BrowserClipboard,
                view,
                config.clone(),
            )
        })
    };

    // Load snippets when the sidebar opens
    {
        let manager = manager.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                if let Err(e) = manager.render().await {
                    log::error!("Failed to load snippets: {}", e);
                }
            });
            || ()
        });
    }

    let on_add = {
        let manager = manager.clone();
        let snippet_ref = snippet_ref.clone();
        let group_ref = group_ref.clone();

        Callback::from(move |_: ()| {
            let Some(snippet_input) = snippet_ref.cast::<HtmlTextAreaElement>() else {
                return;
            };
            let text = snippet_input.value();
            let group = group_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();

            let manager = manager.clone();
            spawn_local(async move {
                match manager.add_snippet(&text, &group).await {
                    Ok(Mutation::Applied) => snippet_input.set_value(""),
                    Ok(Mutation::Skipped(_)) => {}
                    Err(e) => log::error!("Failed to add snippet: {}", e),
                }
            });
        })
    };

    // Enter adds, Shift+Enter keeps the newline
    let on_snippet_keydown = {
        let on_add = on_add.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" && !e.shift_key() {
                e.prevent_default();
                on_add.emit(());
            }
        })
    };

    let on_group_keydown = {
        let on_add = on_add.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                on_add.emit(());
            }
        })
    };

    let on_copy = {
        let manager = manager.clone();
        Callback::from(move |row: SnippetRow| {
            let manager = manager.clone();
            spawn_local(async move {
                manager.copy_snippet(&row.key, &row.text).await;
            });
        })
    };

    let on_delete_snippet = {
        let manager = manager.clone();
        Callback::from(move |key: SnippetKey| {
            let manager = manager.clone();
            spawn_local(async move {
                if let Err(e) = manager.delete_snippet(&key.group, key.index).await {
                    log::error!("Failed to delete snippet: {}", e);
                }
            });
        })
    };

    let on_delete_group = {
        let manager = manager.clone();
        Callback::from(move |group: String| {
            let manager = manager.clone();
            spawn_local(async move {
                if let Err(e) = manager.delete_group(&group).await {
                    log::error!("Failed to delete group: {}", e);
                }
            });
        })
    };

    html! {
        <div class="sidebar">
            <div class="add-form">
                <textarea
                    ref={snippet_ref}
                    class="snippet-input"
                    placeholder="Enter snippet text..."
                    onkeydown={on_snippet_keydown}
                />
                <input
                    ref={group_ref}
                    type="text"
                    class="group-input"
                    placeholder="Group (optional)"
                    onkeydown={on_group_keydown}
                />
                <Button onclick={on_add.reform(|_| ())} variant={ButtonVariant::Primary} block={true}>
                    {"Add Snippet"}
                </Button>
            </div>

            <div class="snippets-list">
                {match &*list {
                    SnippetList::Loading => html! {
                        <Spinner />
                    },
                    SnippetList::Empty => html! {
                        <p class="empty-state">{&props.config.placeholder}</p>
                    },
                    SnippetList::Groups(blocks) => html! {
                        <>
                            {for blocks.iter().map(|block| html! {
                                <div key={block.name.clone()} class="snippet-group">
                                    <GroupHeader
                                        block={block.clone()}
                                        on_delete_group={on_delete_group.clone()}
                                    />
                                    {for block.rows.iter().map(|row| html! {
                                        <SnippetItem
                                            key={row.key.index.to_string()}
                                            row={row.clone()}
                                            copied={copied.0.contains(&row.key)}
                                            on_copy={on_copy.clone()}
                                            on_delete={on_delete_snippet.clone()}
                                        />
                                    })}
                                </div>
                            })}
                        </>
                    },
                }}
            </div>
        </div>
    }
}

/// Resolve after `ms` milliseconds using window.setTimeout
pub async fn sleep(ms: u32) {
    let timeout = timeout_arg(ms);
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let scheduled = web_sys::window().and_then(|window| {
            window
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout)
                .ok()
        });
        if scheduled.is_none() {
            let _ = resolve.call0(&JsValue::NULL);
        }
    });
    let _ = JsFuture::from(promise).await;
}

/// setTimeout takes a signed delay; saturate instead of wrapping negative
fn timeout_arg(ms: u32) -> i32 {
    i32::try_from(ms).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(group: &str, index: usize) -> SnippetKey {
        SnippetKey {
            group: group.to_string(),
            index,
        }
    }

    fn marked(rows: &CopiedRows) -> Vec<SnippetKey> {
        let mut keys: Vec<SnippetKey> = rows.0.iter().cloned().collect();
        keys.sort_by(|a, b| a.group.cmp(&b.group).then_with(|| a.index.cmp(&b.index)));
        keys
    }

    #[test]
    fn test_overlapping_copies_clear_independently() {
        let rows = Rc::new(CopiedRows::default());

        let rows = rows.reduce(CopiedAction::Mark(key("work", 0)));
        let rows = rows.reduce(CopiedAction::Mark(key("work", 1)));
        let rows = rows.reduce(CopiedAction::Clear(key("work", 0)));

        assert_eq!(marked(&rows), vec![key("work", 1)]);
    }

    #[test]
    fn test_clear_unmarked_row_is_noop() {
        let rows = Rc::new(CopiedRows::default()).reduce(CopiedAction::Mark(key("work", 0)));

        let rows = rows.reduce(CopiedAction::Clear(key("home", 0)));

        assert_eq!(marked(&rows), vec![key("work", 0)]);
    }

    #[test]
    fn test_timeout_arg_saturates() {
        assert_eq!(timeout_arg(500), 500);
        assert_eq!(timeout_arg(i32::MAX as u32), i32::MAX);
        assert_eq!(timeout_arg(u32::MAX), i32::MAX);
    }

    #[test]
    fn test_reset_drops_all_marks() {
        let rows = Rc::new(CopiedRows::default());
        let rows = rows.reduce(CopiedAction::Mark(key("work", 0)));
        let rows = rows.reduce(CopiedAction::Mark(key("__ungrouped__", 2)));

        let rows = rows.reduce(CopiedAction::Reset);

        assert!(rows.0.is_empty());
    }
}
