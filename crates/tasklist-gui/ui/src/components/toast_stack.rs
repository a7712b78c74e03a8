use yew::{
  Html,
  Properties,
  function_component,
  html
};

use crate::app::ToastEntry;

#[derive(Properties, PartialEq)]
pub struct ToastStackProps {
  pub toasts: Vec<ToastEntry>
}

#[function_component(ToastStack)]
pub fn toast_stack(
  props: &ToastStackProps
) -> Html {
  if props.toasts.is_empty() {
    return html! {};
  }

  html! {
      <div class="toast-stack" role="status">
          {
              for props.toasts.iter().map(|toast| html! {
                  <div key={toast.id} class={toast.class()}>
                      <span class="toast-icon">{ toast.notice.kind.icon() }</span>
                      <span class="toast-message">{ &toast.notice.message }</span>
                  </div>
              })
          }
      </div>
  }
}
