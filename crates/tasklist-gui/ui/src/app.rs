mod toasts;

use std::cell::{
  Cell,
  RefCell
};
use std::rc::Rc;

use gloo::timers::future::TimeoutFuture;
use tasklist_core::{
  AppConfig,
  Controller,
  FilterMode,
  Notice,
  TaskId
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  UseForceUpdateHandle,
  UseReducerDispatcher,
  function_component,
  html,
  use_force_update,
  use_memo,
  use_mut_ref,
  use_reducer
};

pub use self::toasts::ToastEntry;
use self::toasts::{
  ToastAction,
  ToastQueue
};
use crate::components::{
  EmptyState,
  TaskCounter,
  TaskFiltersPanel,
  TaskForm,
  TaskList,
  ToastStack
};
use crate::storage::BrowserStorage;

const CONFIG_TOML: &str =
  include_str!("../assets/tasklist.toml");

type TaskController =
  Controller<BrowserStorage>;

/// Runs one gesture against the controller, then re-renders and queues
/// the resulting notices.
#[derive(Clone)]
struct Gestures {
  controller: Rc<RefCell<TaskController>>,
  rerender:   UseForceUpdateHandle,
  toasts:     UseReducerDispatcher<ToastQueue>,
  next_toast: Rc<Cell<u64>>,
  config:     Rc<AppConfig>
}

impl Gestures {
  fn run(
    &self,
    gesture: impl FnOnce(
      &mut TaskController
    ) -> Vec<Notice>
  ) {
    let notices = {
      let mut controller =
        self.controller.borrow_mut();
      gesture(&mut *controller)
    };
    self.rerender.force_update();
    for notice in notices {
      self.notify(notice);
    }
  }

  fn notify(&self, notice: Notice) {
    let id = self.next_toast.get();
    self.next_toast.set(id + 1);
    tracing::debug!(
      id,
      kind = ?notice.kind,
      message = %notice.message,
      "showing notice"
    );
    self
      .toasts
      .dispatch(ToastAction::Push(id, notice));

    let toasts = self.toasts.clone();
    let enter =
      self.config.notice_enter_delay_ms;
    let stay =
      self.config.notice_duration_ms;
    let exit = self.config.notice_exit_ms;
    wasm_bindgen_futures::spawn_local(
      async move {
        TimeoutFuture::new(enter).await;
        toasts
          .dispatch(ToastAction::Show(id));
        TimeoutFuture::new(stay).await;
        toasts
          .dispatch(ToastAction::Leave(id));
        TimeoutFuture::new(exit).await;
        toasts
          .dispatch(ToastAction::Remove(id));
      }
    );
  }
}

#[function_component(App)]
pub fn app() -> Html {
  let config = use_memo((), |_| {
    AppConfig::load_or_default(
      CONFIG_TOML
    )
  });
  let controller = {
    let config = config.clone();
    use_mut_ref(move || {
      Controller::load(
        BrowserStorage::open(),
        &config
      )
    })
  };
  let toast_counter = use_memo((), |_| {
    Cell::new(0_u64)
  });
  let toasts =
    use_reducer(ToastQueue::default);
  let rerender = use_force_update();

  let gestures = Gestures {
    controller: controller.clone(),
    rerender,
    toasts: toasts.dispatcher(),
    next_toast: toast_counter,
    config: config.clone()
  };

  let view = controller.borrow().view();
  let active_filter =
    controller.borrow().view_state().filter;

  let on_add = {
    let gestures = gestures.clone();
    Callback::from(move |text: String| {
      gestures.run(|ctl| ctl.add_task(&text));
    })
  };

  let on_toggle = {
    let gestures = gestures.clone();
    Callback::from(move |id: TaskId| {
      gestures.run(|ctl| ctl.toggle_task(&id));
    })
  };

  let on_delete = {
    let gestures = gestures.clone();
    Callback::from(move |id: TaskId| {
      gestures.run(|ctl| ctl.delete_task(&id));
    })
  };

  let on_begin_edit = {
    let gestures = gestures.clone();
    Callback::from(move |id: TaskId| {
      gestures.run(|ctl| {
        ctl.begin_edit(&id);
        Vec::new()
      });
    })
  };

  let on_commit_edit = {
    let gestures = gestures.clone();
    Callback::from(
      move |(id, draft): (TaskId, String)| {
        gestures.run(|ctl| {
          ctl.commit_edit(&id, &draft)
        });
      }
    )
  };

  let on_cancel_edit = {
    let gestures = gestures.clone();
    Callback::from(move |_: ()| {
      gestures.run(|ctl| {
        ctl.cancel_edit();
        Vec::new()
      });
    })
  };

  let on_filter = {
    let gestures = gestures.clone();
    Callback::from(
      move |mode: FilterMode| {
        gestures.run(|ctl| {
          ctl.select_filter(mode);
          Vec::new()
        });
      }
    )
  };

  let on_search = {
    let gestures = gestures.clone();
    Callback::from(move |raw: String| {
      gestures.run(|ctl| {
        ctl.set_search(&raw);
        Vec::new()
      });
    })
  };

  let on_toggle_filters = {
    let gestures = gestures.clone();
    Callback::from(
      move |e: MouseEvent| {
        e.prevent_default();
        gestures.run(|ctl| {
          ctl.toggle_filters_panel();
          Vec::new()
        });
      }
    )
  };

  html! {
      <div class="app-shell">
          <header class="app-header">
              <h1>{ "Tasks" }</h1>
              <button
                  class="btn filters-toggle"
                  type="button"
                  onclick={on_toggle_filters}
                  title={if view.filters_open { "Hide filters" } else { "Show filters" }}
              >
                  { if view.filters_open { "✕" } else { "Filter" } }
              </button>
          </header>
          <TaskForm on_add={on_add} />
          <TaskFiltersPanel
              open={view.filters_open}
              active={active_filter}
              on_filter={on_filter}
              on_search={on_search}
          />
          <TaskCounter counters={view.counters} />
          <EmptyState show={view.show_empty} />
          <TaskList
              items={view.items.clone()}
              collapsed={view.show_empty}
              on_toggle={on_toggle}
              on_delete={on_delete}
              on_begin_edit={on_begin_edit}
              on_commit_edit={on_commit_edit}
              on_cancel_edit={on_cancel_edit}
          />
          <ToastStack toasts={toasts.entries.clone()} />
      </div>
  }
}
