use std::collections::BTreeMap;

use crate::{
    animation::transition::{Target, Transition},
    entry::{boxes::EntryBox, value::Value},
    foundation::{
        core::{Point, Rect, Vec2},
        error::{VarScopeError, VarScopeResult},
        math::EPS,
    },
    layout::{
        address::{Address, Arrangement},
        place,
        resize::{ResizeOutcome, resize},
    },
    scene::context::SceneContext,
};

/// Result of adding an entry to a scope.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct EntryCreated {
    pub address: Address,
    pub entry: EntryBox,
    pub resize: ResizeOutcome,
    /// Shelf growth (if any), column-1 shifts (grid only), then the entry fading in.
    pub transitions: Vec<Transition>,
}

/// Result of changing an entry's value.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct EntryUpdated {
    pub before: EntryBox,
    pub after: EntryBox,
    pub transitions: Vec<Transition>,
}

/// One shelf of variables, i.e. one call frame.
///
/// Addresses are assigned once: entries are never moved to another address or removed.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableScope {
    depth: usize,
    shelf: Rect,
    min_width: f64,
    arrangement: Arrangement,
    entries: BTreeMap<Address, EntryBox>,
    /// Creation order.
    order: Vec<Address>,
    /// Extra elements owned by the scope; they leave with it when it pops.
    attachments: BTreeMap<String, Rect>,
}

impl VariableScope {
    pub fn new(depth: usize, shelf: Rect, min_width: f64, arrangement: Arrangement) -> Self {
        Self {
            depth,
            shelf,
            min_width,
            arrangement,
            entries: BTreeMap::new(),
            order: Vec::new(),
            attachments: BTreeMap::new(),
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn shelf(&self) -> Rect {
        self.shelf
    }

    pub fn min_width(&self) -> f64 {
        self.min_width
    }

    pub fn arrangement(&self) -> Arrangement {
        self.arrangement
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry_at(&self, address: Address) -> Option<&EntryBox> {
        self.entries.get(&address)
    }

    pub fn entry(&self, name: &str) -> Option<&EntryBox> {
        self.address_of(name).and_then(|a| self.entries.get(&a))
    }

    pub fn address_of(&self, name: &str) -> Option<Address> {
        self.order
            .iter()
            .copied()
            .find(|a| self.entries.get(a).is_some_and(|e| e.name == name))
    }

    /// Entries in creation order.
    pub fn entries(&self) -> impl Iterator<Item = (Address, &EntryBox)> {
        self.order
            .iter()
            .filter_map(|a| self.entries.get(a).map(|e| (*a, e)))
    }

    pub fn attachments(&self) -> &BTreeMap<String, Rect> {
        &self.attachments
    }

    /// Smallest rectangle covering the shelf, entries and attachments.
    pub fn bounds(&self) -> Rect {
        self.entries
            .values()
            .map(|e| e.bounds)
            .chain(self.attachments.values().copied())
            .fold(self.shelf, |acc, r| acc.union(r))
    }

    /// Row count fed to [`shelf_height`]: entries per column, fractional for a half-filled grid
    /// row.
    ///
    /// [`shelf_height`]: crate::layout::resize::shelf_height
    pub fn rows(&self) -> f64 {
        self.entries.len() as f64 / self.arrangement.vars_per_row() as f64
    }

    pub fn anchor_for(&self, address: Address, ctx: &SceneContext) -> VarScopeResult<Point> {
        place::anchor_for(self, address, ctx)
    }

    /// Lay out a new entry, store it, and grow the shelf if needed.
    ///
    /// With `at == None` the next address in creation order is used.
    #[tracing::instrument(level = "debug", skip(self, value, ctx), fields(depth = self.depth))]
    pub fn create_entry(
        &mut self,
        name: &str,
        value: Value,
        at: Option<Address>,
        ctx: &SceneContext,
    ) -> VarScopeResult<EntryCreated> {
        if self.address_of(name).is_some() {
            return Err(VarScopeError::layout(format!(
                "variable '{name}' already exists in scope {}",
                self.depth
            )));
        }
        let address = at.unwrap_or_else(|| self.arrangement.next_address(self.entries.len()));
        let anchor = self.anchor_for(address, ctx)?;
        let mut entry = EntryBox::layout(name, value, anchor, ctx);
        tracing::debug!(%address, bounds = ?entry.bounds, "placed entry");

        let shifts = self.reflow_column_one(address, &mut entry, ctx.config.entry_gap);
        self.entries.insert(address, entry.clone());
        self.order.push(address);

        let outcome = resize(
            self.shelf,
            self.min_width,
            self.entries.values().map(|e| e.bounds.width()),
            self.rows(),
            &ctx.config,
        );
        let mut transitions = Vec::with_capacity(2);
        if outcome.needs_animation {
            self.shelf = outcome.to;
            transitions.push(Transition::morph(
                Target::Shelf { scope: self.depth },
                outcome.from,
                outcome.to,
            ));
        }
        transitions.extend(shifts);
        transitions.push(Transition::fade_in(
            Target::Entry {
                scope: self.depth,
                name: name.to_string(),
            },
            entry.bounds,
        ));

        Ok(EntryCreated {
            address,
            entry,
            resize: outcome,
            transitions,
        })
    }

    /// Replace an entry's value, keeping its upper-left corner. The shelf is not resized.
    #[tracing::instrument(level = "debug", skip(self, value, ctx), fields(depth = self.depth))]
    pub fn update_entry(
        &mut self,
        name: &str,
        value: Value,
        ctx: &SceneContext,
    ) -> VarScopeResult<EntryUpdated> {
        let address = self.address_of(name).ok_or_else(|| {
            VarScopeError::layout(format!(
                "variable '{name}' does not exist in scope {}",
                self.depth
            ))
        })?;
        let before = self
            .entries
            .get(&address)
            .cloned()
            .ok_or_else(|| VarScopeError::layout(format!("no entry at {address}")))?;
        let mut after = before.with_value(value, ctx);
        let shifts = self.reflow_column_one(address, &mut after, ctx.config.entry_gap);
        self.entries.insert(address, after.clone());

        let entry = Target::Entry {
            scope: self.depth,
            name: name.to_string(),
        };
        let contents = Target::EntryContents {
            scope: self.depth,
            name: name.to_string(),
        };
        let mut transitions = vec![
            Transition::morph(entry, before.bounds, after.bounds),
            Transition::morph(contents.clone(), before.contents_bounds, after.contents_bounds),
            Transition::fade_out(contents, before.contents_bounds),
        ];
        transitions.extend(shifts);
        Ok(EntryUpdated {
            before,
            after,
            transitions,
        })
    }

    /// How far grid column 1 must move right so an entry with `bounds` at `address` clears
    /// its other-column neighbours in the same and adjacent rows.
    fn column_one_overlap(&self, address: Address, bounds: Rect, gap: f64) -> Option<Vec2> {
        let Address::Grid(row, col) = address else {
            return None;
        };
        let overlap = (row.saturating_sub(1)..=row + 1)
            .filter_map(|r| self.entries.get(&Address::Grid(r, 1 - col)))
            .map(|other| match col {
                0 => bounds.x1 + gap - other.bounds.x0,
                _ => other.bounds.x1 + gap - bounds.x0,
            })
            .fold(0.0, f64::max);
        (overlap > EPS).then_some(Vec2::new(overlap, 0.0))
    }

    /// Keep grid columns apart around `entry`, which is about to be stored at `address`.
    ///
    /// Column 1 moves as a whole, `entry` included when it sits there; the returned shifts cover
    /// the stored entries only.
    fn reflow_column_one(
        &mut self,
        address: Address,
        entry: &mut EntryBox,
        gap: f64,
    ) -> Vec<Transition> {
        let Some(delta) = self.column_one_overlap(address, entry.bounds, gap) else {
            return Vec::new();
        };
        if let Address::Grid(_, 1) = address {
            entry.shift(delta);
        }
        let depth = self.depth;
        tracing::debug!(%address, dx = delta.x, "shifting grid column 1");
        self.entries
            .iter_mut()
            .filter(|(a, _)| matches!(a, Address::Grid(_, 1)) && **a != address)
            .map(|(_, e)| {
                e.shift(delta);
                Transition::shift(
                    Target::Entry {
                        scope: depth,
                        name: e.name.clone(),
                    },
                    delta,
                )
            })
            .collect()
    }

    /// Attach an extra element to the scope. Returns the bounds previously stored under `key`.
    pub fn attach(&mut self, key: impl Into<String>, bounds: Rect) -> Option<Rect> {
        self.attachments.insert(key.into(), bounds)
    }

    pub fn detach(&mut self, key: &str) -> Option<Rect> {
        self.attachments.remove(key)
    }

    /// Move the shelf and everything on it.
    pub fn shift(&mut self, delta: Vec2) {
        self.shelf = self.shelf + delta;
        for e in self.entries.values_mut() {
            e.shift(delta);
        }
        for r in self.attachments.values_mut() {
            *r = *r + delta;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scope/container.rs"]
mod tests;
