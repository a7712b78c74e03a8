use tasklist_core::Counters;
use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskCounterProps {
  pub counters: Option<Counters>
}

#[function_component(TaskCounter)]
pub fn task_counter(
  props: &TaskCounterProps
) -> Html {
  let Some(counters) = props.counters
  else {
    return html! {};
  };

  let bar_class = if counters.all_done {
    "progress complete"
  } else {
    "progress"
  };

  html! {
      <div class="task-counter">
          <span>
              <span id="completed-count">{ counters.completed }</span>
              { " of " }
              <span id="total-count">{ counters.total }</span>
              { " done" }
          </span>
          <span id="progress-percentage">{ format!("{}%", counters.percentage) }</span>
          <div class="progress-track">
              <div class={bar_class} style={format!("width:{}%;", counters.percentage)}></div>
          </div>
      </div>
  }
}
