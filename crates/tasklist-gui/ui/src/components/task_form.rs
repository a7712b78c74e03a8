use web_sys::{
  HtmlInputElement,
  InputEvent,
  SubmitEvent
};
use yew::{
  Callback,
  Html,
  Properties,
  TargetCast,
  function_component,
  html,
  use_state
};

#[derive(Properties, PartialEq)]
pub struct TaskFormProps {
  pub on_add: Callback<String>
}

/// New-task entry. Submits on the button or Enter; blank drafts are
/// dropped without clearing the field.
#[function_component(TaskForm)]
pub fn task_form(
  props: &TaskFormProps
) -> Html {
  let draft = use_state(String::new);

  let oninput = {
    let draft = draft.clone();
    Callback::from(move |e: InputEvent| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      draft.set(input.value());
    })
  };

  let onsubmit = {
    let draft = draft.clone();
    let on_add = props.on_add.clone();
    Callback::from(move |e: SubmitEvent| {
      e.prevent_default();
      if draft.trim().is_empty() {
        return;
      }
      on_add.emit((*draft).clone());
      draft.set(String::new());
    })
  };

  html! {
      <form class="task-form" onsubmit={onsubmit}>
          <input
              id="task-input"
              class="task-input"
              type="text"
              placeholder="What needs doing?"
              autocomplete="off"
              value={(*draft).clone()}
              oninput={oninput}
          />
          <button id="add-task-btn" class="btn primary" type="submit">{ "Add" }</button>
      </form>
  }
}
