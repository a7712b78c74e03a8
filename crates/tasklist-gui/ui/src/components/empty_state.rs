use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct EmptyStateProps {
  pub show: bool
}

#[function_component(EmptyState)]
pub fn empty_state(
  props: &EmptyStateProps
) -> Html {
  if !props.show {
    return html! {};
  }

  html! {
      <div class="empty-state-container">
          <div class="empty-state-title">{ "Nothing to show" }</div>
          <div class="empty-state-hint">{ "Add a task, or change the filter or search." }</div>
      </div>
  }
}
