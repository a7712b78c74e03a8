use std::rc::Rc;

use tasklist_core::Notice;
use yew::Reducible;

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
)]
pub enum ToastPhase {
  Entering,
  Shown,
  Leaving
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToastEntry {
  pub id:     u64,
  pub notice: Notice,
  pub phase:  ToastPhase
}

impl ToastEntry {
  pub fn class(&self) -> String {
    let phase = match self.phase {
      | ToastPhase::Entering => "entering",
      | ToastPhase::Shown => "shown",
      | ToastPhase::Leaving => "leaving"
    };
    format!(
      "{} {phase}",
      self.notice.kind.css_class()
    )
  }
}

pub enum ToastAction {
  Push(u64, Notice),
  Show(u64),
  Leave(u64),
  Remove(u64)
}

/// Toasts currently on screen, oldest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
  pub entries: Vec<ToastEntry>
}

impl Reducible for ToastQueue {
  type Action = ToastAction;

  fn reduce(
    self: Rc<Self>,
    action: Self::Action
  ) -> Rc<Self> {
    let mut entries =
      self.entries.clone();
    match action {
      | ToastAction::Push(id, notice) => {
        entries.push(ToastEntry {
          id,
          notice,
          phase: ToastPhase::Entering
        });
      }
      | ToastAction::Show(id) => {
        set_phase(
          &mut entries,
          id,
          ToastPhase::Shown
        );
      }
      | ToastAction::Leave(id) => {
        set_phase(
          &mut entries,
          id,
          ToastPhase::Leaving
        );
      }
      | ToastAction::Remove(id) => {
        entries
          .retain(|entry| entry.id != id);
      }
    }
    Rc::new(Self { entries })
  }
}

fn set_phase(
  entries: &mut [ToastEntry],
  id: u64,
  phase: ToastPhase
) {
  if let Some(entry) = entries
    .iter_mut()
    .find(|entry| entry.id == id)
  {
    entry.phase = phase;
  }
}

#[cfg(test)]
mod tests {
  use std::rc::Rc;

  use tasklist_core::Notice;
  use yew::Reducible;

  use super::{
    ToastAction,
    ToastPhase,
    ToastQueue
  };

  fn apply(
    queue: Rc<ToastQueue>,
    actions: Vec<ToastAction>
  ) -> Rc<ToastQueue> {
    actions
      .into_iter()
      .fold(queue, |queue, action| {
        queue.reduce(action)
      })
  }

  fn phases(
    queue: &ToastQueue
  ) -> Vec<(u64, ToastPhase)> {
    queue
      .entries
      .iter()
      .map(|entry| (entry.id, entry.phase))
      .collect()
  }

  #[test]
  fn toast_runs_through_its_phases() {
    let queue = apply(
      Rc::new(ToastQueue::default()),
      vec![ToastAction::Push(
        1,
        Notice::success("Task added")
      )]
    );
    assert_eq!(
      phases(&queue),
      vec![(1, ToastPhase::Entering)]
    );
    assert_eq!(
      queue.entries[0].class(),
      "toast success entering"
    );

    let queue =
      queue.reduce(ToastAction::Show(1));
    assert_eq!(
      phases(&queue),
      vec![(1, ToastPhase::Shown)]
    );

    let queue =
      queue.reduce(ToastAction::Leave(1));
    assert_eq!(
      phases(&queue),
      vec![(1, ToastPhase::Leaving)]
    );

    let queue =
      queue.reduce(ToastAction::Remove(1));
    assert!(queue.entries.is_empty());
  }

  #[test]
  fn stale_ids_leave_other_toasts_alone() {
    let queue = apply(
      Rc::new(ToastQueue::default()),
      vec![
        ToastAction::Push(
          1,
          Notice::success("Task added")
        ),
        ToastAction::Push(
          2,
          Notice::info("Task marked pending")
        ),
        ToastAction::Show(2),
      ]
    );
    let before = phases(&queue);

    let queue = apply(queue, vec![
      ToastAction::Show(9),
      ToastAction::Leave(9),
      ToastAction::Remove(9),
    ]);
    assert_eq!(phases(&queue), before);
  }

  #[test]
  fn toasts_stay_oldest_first() {
    let queue = apply(
      Rc::new(ToastQueue::default()),
      vec![
        ToastAction::Push(
          1,
          Notice::success("Task added")
        ),
        ToastAction::Push(
          2,
          Notice::error("Task deleted")
        ),
        ToastAction::Push(
          3,
          Notice::info("Task marked pending")
        ),
        ToastAction::Show(3),
        ToastAction::Show(1),
        ToastAction::Remove(2),
      ]
    );
    assert_eq!(
      phases(&queue),
      vec![
        (1, ToastPhase::Shown),
        (3, ToastPhase::Shown),
      ]
    );
  }
}
