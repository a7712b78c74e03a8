use tasklist_core::{
  ItemView,
  TaskId
};
use web_sys::{
  FocusEvent,
  HtmlInputElement,
  InputEvent,
  KeyboardEvent
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  NodeRef,
  Properties,
  TargetCast,
  function_component,
  html,
  use_effect_with,
  use_node_ref,
  use_state
};

#[derive(Properties, PartialEq)]
pub struct TaskListRowProps {
  pub item:           ItemView,
  pub on_toggle:      Callback<TaskId>,
  pub on_delete:      Callback<TaskId>,
  pub on_begin_edit:  Callback<TaskId>,
  pub on_commit_edit:
    Callback<(TaskId, String)>,
  pub on_cancel_edit: Callback<()>
}

#[function_component(TaskListRow)]
pub fn task_list_row(
  props: &TaskListRowProps
) -> Html {
  let item = &props.item;
  let draft = use_state(String::new);
  let edit_ref = use_node_ref();

  {
    let draft = draft.clone();
    let edit_ref = edit_ref.clone();
    let text = item.text.clone();
    use_effect_with(
      item.editing,
      move |editing| {
        if *editing {
          draft.set(text);
          focus(&edit_ref);
        }
        || ()
      }
    );
  }

  let id = item.id.clone();

  let on_toggle = {
    let on_toggle = props.on_toggle.clone();
    let id = id.clone();
    Callback::from(move |_: yew::Event| {
      on_toggle.emit(id.clone());
    })
  };

  let on_delete = {
    let on_delete = props.on_delete.clone();
    let id = id.clone();
    Callback::from(move |_: MouseEvent| {
      on_delete.emit(id.clone());
    })
  };

  let on_begin_edit = {
    let on_begin_edit =
      props.on_begin_edit.clone();
    let id = id.clone();
    let enabled = item.edit_enabled;
    Callback::from(move |_: MouseEvent| {
      if enabled {
        on_begin_edit.emit(id.clone());
      }
    })
  };

  let editor = if item.editing {
    let oninput = {
      let draft = draft.clone();
      Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement =
          e.target_unchecked_into();
        draft.set(input.value());
      })
    };

    let onkeydown = {
      let draft = draft.clone();
      let on_commit =
        props.on_commit_edit.clone();
      let on_cancel =
        props.on_cancel_edit.clone();
      let id = id.clone();
      Callback::from(
        move |e: KeyboardEvent| {
          match e.key().as_str() {
            | "Enter" => {
              e.prevent_default();
              on_commit.emit((
                id.clone(),
                (*draft).clone()
              ));
            }
            | "Escape" => on_cancel.emit(()),
            | _ => {}
          }
        }
      )
    };

    let onblur = {
      let draft = draft.clone();
      let on_commit =
        props.on_commit_edit.clone();
      let id = id.clone();
      Callback::from(move |_: FocusEvent| {
        on_commit
          .emit((id.clone(), (*draft).clone()));
      })
    };

    html! {
        <input
            ref={edit_ref}
            class="task-edit"
            type="text"
            value={(*draft).clone()}
            oninput={oninput}
            onkeydown={onkeydown}
            onblur={onblur}
        />
    }
  } else {
    html! {
        <span
            class={if item.completed { "task-text done" } else { "task-text" }}
            ondblclick={on_begin_edit.clone()}
        >
            { &item.text }
        </span>
    }
  };

  html! {
      <li class={item.row_class()} data-id={item.id.as_str().to_string()}>
          <div class="task-main">
              <input
                  type="checkbox"
                  class="checkbox"
                  checked={item.completed}
                  onchange={on_toggle}
              />
              { editor }
          </div>
          <div class="task-buttons">
              <button
                  class={if item.edit_enabled { "edit-btn" } else { "edit-btn disabled" }}
                  type="button"
                  disabled={!item.edit_enabled}
                  onclick={on_begin_edit}
                  title="Edit"
              >
                  { "✎" }
              </button>
              <button class="delete-btn" type="button" onclick={on_delete} title="Delete">{ "🗑" }</button>
          </div>
      </li>
  }
}

fn focus(node: &NodeRef) {
  if let Some(input) =
    node.cast::<HtmlInputElement>()
  {
    let _ = input.focus();
    input.select();
  }
}
