use tasklist_core::{
  ItemView,
  TaskId
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::TaskListRow;

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
  pub items:          Vec<ItemView>,
  /// Hides the list element while the empty placeholder is shown. Rows
  /// stay mounted.
  pub collapsed:      bool,
  pub on_toggle:      Callback<TaskId>,
  pub on_delete:      Callback<TaskId>,
  pub on_begin_edit:  Callback<TaskId>,
  pub on_commit_edit:
    Callback<(TaskId, String)>,
  pub on_cancel_edit: Callback<()>
}

#[function_component(TaskList)]
pub fn task_list(
  props: &TaskListProps
) -> Html {
  html! {
      <ul id="task-list" class={if props.collapsed { "task-list hidden" } else { "task-list" }}>
          {
              for props.items.iter().cloned().map(|item| {
                  let key = item.id.to_string();
                  html! {
                      <TaskListRow
                          key={key}
                          item={item}
                          on_toggle={props.on_toggle.clone()}
                          on_delete={props.on_delete.clone()}
                          on_begin_edit={props.on_begin_edit.clone()}
                          on_commit_edit={props.on_commit_edit.clone()}
                          on_cancel_edit={props.on_cancel_edit.clone()}
                      />
                  }
              })
          }
      </ul>
  }
}
