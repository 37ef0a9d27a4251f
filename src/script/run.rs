use std::collections::BTreeMap;

use crate::{
    animation::transition::Transition,
    foundation::{
        core::{Corner, Rect, Vec2},
        error::VarScopeResult,
    },
    layout::address::{Address, Arrangement},
    scene::context::SceneContext,
    scope::{
        area::{PushConfig, Pushed, VariableArea},
        container::{EntryCreated, EntryUpdated, VariableScope},
    },
    script::model::{Script, Step},
};

/// What replaying a script produced: one record per step, then the final layout.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Report {
    pub steps: Vec<StepReport>,
    pub final_state: AreaSnapshot,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum StepReport {
    Create {
        depth: usize,
        created: EntryCreated,
    },
    Update {
        depth: usize,
        updated: EntryUpdated,
    },
    Push {
        pushed: Pushed,
    },
    Pop {
        depth: usize,
        transition: Transition,
    },
    Attach {
        depth: usize,
        key: String,
        bounds: Rect,
    },
    Align {
        delta: Vec2,
    },
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct AreaSnapshot {
    pub title: Rect,
    pub bounds: Rect,
    pub scopes: Vec<ScopeSnapshot>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ScopeSnapshot {
    pub depth: usize,
    pub vars_per_row: Arrangement,
    pub shelf: Rect,
    pub entries: Vec<EntrySnapshot>,
    pub attachments: BTreeMap<String, Rect>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct EntrySnapshot {
    pub address: Address,
    pub name: String,
    pub contents: String,
    pub bounds: Rect,
}

impl AreaSnapshot {
    pub fn of(area: &VariableArea) -> Self {
        Self {
            title: area.title(),
            bounds: area.bounds(),
            scopes: area.scopes().iter().map(ScopeSnapshot::of).collect(),
        }
    }
}

impl ScopeSnapshot {
    pub fn of(scope: &VariableScope) -> Self {
        Self {
            depth: scope.depth(),
            vars_per_row: scope.arrangement(),
            shelf: scope.shelf(),
            entries: scope
                .entries()
                .map(|(address, e)| EntrySnapshot {
                    address,
                    name: e.name.clone(),
                    contents: e.contents.clone(),
                    bounds: e.bounds,
                })
                .collect(),
            attachments: scope.attachments().clone(),
        }
    }
}

/// Replay `script` against a fresh area using its own layout config.
#[tracing::instrument(skip(script), fields(steps = script.steps.len()))]
pub fn run_script(script: &Script) -> VarScopeResult<Report> {
    let ctx = SceneContext::with_config(script.config.clone())?;
    run_script_in(script, &ctx)
}

/// Replay `script` with a caller-provided scene context; `script.config` is ignored.
pub fn run_script_in(script: &Script, ctx: &SceneContext) -> VarScopeResult<Report> {
    let mut area = VariableArea::new(script.area.vars_per_row, ctx);
    if let Some(anchor) = script.area.anchor {
        area.align_to(anchor, script.area.corner);
    }

    let mut steps = Vec::with_capacity(script.steps.len());
    for (idx, step) in script.steps.iter().enumerate() {
        let report =
            apply_step(&mut area, step, ctx).map_err(|e| e.context(format!("step {idx}")))?;
        steps.push(report);
    }
    tracing::debug!(depth = area.depth(), "script finished");

    Ok(Report {
        steps,
        final_state: AreaSnapshot::of(&area),
    })
}

fn apply_step(
    area: &mut VariableArea,
    step: &Step,
    ctx: &SceneContext,
) -> VarScopeResult<StepReport> {
    let depth = area.top().depth();
    let report = match step {
        Step::Create { name, value, at } => StepReport::Create {
            depth,
            created: area.create_entry(name, value.clone(), *at, ctx)?,
        },
        Step::Update { name, value } => StepReport::Update {
            depth,
            updated: area.update_entry(name, value.clone(), ctx)?,
        },
        Step::Push {
            initial_lines,
            vars_per_row,
        } => StepReport::Push {
            pushed: area.push(
                PushConfig {
                    initial_lines: *initial_lines,
                    arrangement: *vars_per_row,
                },
                ctx,
            ),
        },
        Step::Pop => {
            let popped = area.pop(ctx)?;
            StepReport::Pop {
                depth: popped.scope.depth(),
                transition: popped.transition,
            }
        }
        Step::Attach { key, bounds } => {
            area.top_mut().attach(key.clone(), *bounds);
            StepReport::Attach {
                depth,
                key: key.clone(),
                bounds: *bounds,
            }
        }
        Step::Align { point, corner } => {
            let before = Corner::UpperLeft.of(area.bounds());
            area.align_to(*point, *corner);
            StepReport::Align {
                delta: Corner::UpperLeft.of(area.bounds()) - before,
            }
        }
    };
    Ok(report)
}

#[cfg(test)]
#[path = "../../tests/unit/script/run.rs"]
mod tests;
