//! Undo/redo over whole-scene snapshots.
//!
//! The history keeps a *baseline*: the scene as of the last recorded step.
//! `record` is called right after a successful mutation with the new
//! scene; the old baseline goes onto the undo stack, labelled with the
//! mutation that left it. Undo swaps the live scene with the top entry,
//! redo swaps it back.
//!
//! Drag gestures mutate the live scene without recording and call
//! `record` once on release, so the whole gesture is one step.
//!
//! Snapshots are `Scene` clones. Scene storage is persistent, so a clone
//! shares everything that did not change between steps.

use crate::scene::Scene;
use std::collections::VecDeque;
use std::mem;

/// Default maximum undo depth.
pub const DEFAULT_CAPACITY: usize = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    /// Human-readable name of the step, e.g. "Add star".
    pub label: String,
    pub scene: Scene,
}

#[derive(Debug, Clone)]
pub struct History {
    undo_stack: VecDeque<HistoryEntry>,
    redo_stack: VecDeque<HistoryEntry>,
    baseline: Scene,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl History {
    pub fn new(capacity: usize) -> Self {
        Self {
            undo_stack: VecDeque::with_capacity(capacity),
            redo_stack: VecDeque::new(),
            baseline: Scene::new(),
            capacity: capacity.max(1),
        }
    }

    /// Forget all steps and treat `scene` as the starting point.
    pub fn reset_baseline(&mut self, scene: &Scene) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.baseline = scene.clone();
    }

    /// The scene as of the last recorded step.
    pub fn baseline(&self) -> &Scene {
        &self.baseline
    }

    /// Record a completed mutation. `scene` is the state after it.
    /// Identical states are ignored.
    pub fn record(&mut self, label: impl Into<String>, scene: &Scene) {
        if *scene == self.baseline {
            return;
        }
        let before = mem::replace(&mut self.baseline, scene.clone());
        push_bounded(
            &mut self.undo_stack,
            HistoryEntry {
                label: label.into(),
                scene: before,
            },
            self.capacity,
        );
        self.redo_stack.clear();
    }

    /// Restore the state before the last step. Returns its label.
    pub fn undo(&mut self, scene: &mut Scene) -> Option<String> {
        let entry = self.undo_stack.pop_back()?;
        let current = mem::replace(scene, entry.scene);
        push_bounded(
            &mut self.redo_stack,
            HistoryEntry {
                label: entry.label.clone(),
                scene: current,
            },
            self.capacity,
        );
        self.baseline = scene.clone();
        log::debug!("undo: {}", entry.label);
        Some(entry.label)
    }

    /// Re-apply the last undone step. Returns its label.
    pub fn redo(&mut self, scene: &mut Scene) -> Option<String> {
        let entry = self.redo_stack.pop_back()?;
        let current = mem::replace(scene, entry.scene);
        push_bounded(
            &mut self.undo_stack,
            HistoryEntry {
                label: entry.label.clone(),
                scene: current,
            },
            self.capacity,
        );
        self.baseline = scene.clone();
        log::debug!("redo: {}", entry.label);
        Some(entry.label)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Undo labels, oldest first.
    pub fn labels(&self) -> Vec<&str> {
        self.undo_stack.iter().map(|e| e.label.as_str()).collect()
    }
}

fn push_bounded(stack: &mut VecDeque<HistoryEntry>, entry: HistoryEntry, capacity: usize) {
    if stack.len() >= capacity {
        stack.pop_front();
    }
    stack.push_back(entry);
}
