//! Topological class order.
//!
//! A class is declared only after its parent and after every class it
//! uses by value in a field, directly or as the element of an array (inline
//! or behind an array pointer). Class-pointer fields only need the forward
//! declaration and impose no order.

use tern_ir::{ClassId, Program};

use crate::CodegenError;

/// Emission state of one class.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum EmitState {
    Unvisited,
    InProgress,
    Done,
}

/// Classes in declaration order such that every class follows its parent
/// and the classes its fields store by value.
///
/// Ties keep the program's class order.
///
/// # Errors
/// [`CodegenError::CircularDependency`] naming the first class reached again
/// while its own dependencies are still being ordered.
pub fn class_order(program: &Program) -> Result<Vec<ClassId>, CodegenError> {
    let mut states = vec![EmitState::Unvisited; program.classes.len()];
    let mut order = Vec::with_capacity(program.classes.len());
    for id in program.class_ids() {
        visit(program, id, &mut states, &mut order)?;
    }
    Ok(order)
}

fn visit(
    program: &Program,
    id: ClassId,
    states: &mut [EmitState],
    order: &mut Vec<ClassId>,
) -> Result<(), CodegenError> {
    match states[id.index()] {
        EmitState::Done => return Ok(()),
        EmitState::InProgress => {
            return Err(CodegenError::CircularDependency {
                class: program.class(id).name.clone(),
            })
        }
        EmitState::Unvisited => {}
    }
    states[id.index()] = EmitState::InProgress;

    let class = program.class(id);
    if let Some(parent) = class.parent {
        visit(program, parent, states, order)?;
    }
    for field in &class.fields {
        if let Some(contained) = field.ty.base_class() {
            visit(program, contained, states, order)?;
        }
    }

    states[id.index()] = EmitState::Done;
    tracing::trace!(class = %class.name, position = order.len(), "class ordered");
    order.push(id);
    Ok(())
}
