use tasklist_core::FilterMode;
use web_sys::{
  HtmlInputElement,
  InputEvent
};
use yew::{
  Callback,
  Html,
  Properties,
  TargetCast,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskFiltersPanelProps {
  pub open:      bool,
  pub active:    FilterMode,
  pub on_filter: Callback<FilterMode>,
  pub on_search: Callback<String>
}

#[function_component(TaskFiltersPanel)]
pub fn task_filters_panel(
  props: &TaskFiltersPanelProps
) -> Html {
  let on_search = props.on_search.clone();
  let oninput =
    Callback::from(move |e: InputEvent| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      on_search.emit(input.value());
    });

  html! {
      <div class={if props.open { "controls" } else { "controls hidden" }}>
          <div class="filter-buttons">
              {
                  for FilterMode::ALL.into_iter().map(|mode| {
                      let on_filter = props.on_filter.clone();
                      let class = if mode == props.active {
                          "filter-btn active"
                      } else {
                          "filter-btn"
                      };
                      html! {
                          <button
                              class={class}
                              type="button"
                              data-filter={mode.as_str()}
                              onclick={move |_| on_filter.emit(mode)}
                          >
                              { mode.label() }
                          </button>
                      }
                  })
              }
          </div>
          <input
              id="search-input"
              class="search-input"
              type="search"
              placeholder="Search tasks"
              oninput={oninput}
          />
      </div>
  }
}
