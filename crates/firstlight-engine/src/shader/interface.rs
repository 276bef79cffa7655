use std::collections::BTreeMap;

use naga::{Binding, Handle, Module, Type, TypeInner};

use crate::geometry::VertexLayout;

use super::error::ShaderError;
use super::stage::{CompiledStage, StageKind};

/// Link-time interface check between two compiled stages and a vertex layout.
///
/// - every fragment input location is written by the vertex stage, with the
///   same type
/// - every vertex input location has an attribute slot in `layout`
pub fn check_interface(
    vertex: &CompiledStage,
    fragment: &CompiledStage,
    layout: &VertexLayout,
) -> Result<(), ShaderError> {
    if vertex.kind() != StageKind::Vertex || fragment.kind() != StageKind::Fragment {
        return Err(ShaderError::link(format!(
            "expected a vertex and a fragment stage, got {} and {}",
            vertex.kind(),
            fragment.kind()
        )));
    }

    let (Some(vs_entry), Some(fs_entry)) = (vertex.entry_point(), fragment.entry_point()) else {
        return Err(ShaderError::link("stage without a main entry point"));
    };

    let mut vs_inputs = BTreeMap::new();
    for arg in &vs_entry.function.arguments {
        collect_locations(vertex.module(), arg.ty, arg.binding.as_ref(), &mut vs_inputs);
    }

    let mut vs_outputs = BTreeMap::new();
    if let Some(result) = &vs_entry.function.result {
        collect_locations(vertex.module(), result.ty, result.binding.as_ref(), &mut vs_outputs);
    }

    let mut fs_inputs = BTreeMap::new();
    for arg in &fs_entry.function.arguments {
        collect_locations(fragment.module(), arg.ty, arg.binding.as_ref(), &mut fs_inputs);
    }

    for location in vs_inputs.keys() {
        if layout.slot(*location).is_none() {
            return Err(ShaderError::link(format!(
                "vertex input at location {location} has no attribute slot in the vertex layout"
            )));
        }
    }

    for (location, fs_ty) in &fs_inputs {
        match vs_outputs.get(location) {
            None => {
                return Err(ShaderError::link(format!(
                    "fragment input at location {location} is not written by the vertex stage"
                )));
            }
            Some(vs_ty) if vs_ty != fs_ty => {
                return Err(ShaderError::link(format!(
                    "type mismatch at location {location}: vertex writes {vs_ty:?}, fragment reads {fs_ty:?}"
                )));
            }
            Some(_) => {}
        }
    }

    Ok(())
}

/// Gathers `@location` bindings reachable from one argument or result,
/// descending into structs.
fn collect_locations(
    module: &Module,
    ty: Handle<Type>,
    binding: Option<&Binding>,
    out: &mut BTreeMap<u32, TypeInner>,
) {
    match binding {
        Some(Binding::Location { location, .. }) => {
            out.insert(*location, module.types[ty].inner.clone());
        }
        Some(Binding::BuiltIn(_)) => {}
        None => {
            if let TypeInner::Struct { members, .. } = &module.types[ty].inner {
                for member in members {
                    collect_locations(module, member.ty, member.binding.as_ref(), out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shader::compile_stage;

    const COLORED_VERTEX: &str = "
        struct VertexOutput {
            @builtin(position) position: vec4<f32>,
            @location(0) color: vec3<f32>,
        };

        @vertex
        fn main(@location(0) position: vec3<f32>, @location(1) color: vec3<f32>) -> VertexOutput {
            var out: VertexOutput;
            out.position = vec4<f32>(position, 1.0);
            out.color = color;
            return out;
        }
    ";

    const COLORED_FRAGMENT: &str = "
        @fragment
        fn main(@location(0) color: vec3<f32>) -> @location(0) vec4<f32> {
            return vec4<f32>(color, 1.0);
        }
    ";

    fn vs(src: &str) -> CompiledStage { compile_stage(StageKind::Vertex, src).unwrap() }
    fn fs(src: &str) -> CompiledStage { compile_stage(StageKind::Fragment, src).unwrap() }

    fn pos_color() -> VertexLayout { VertexLayout::interleaved(&[3, 3]).unwrap() }

    #[test]
    fn matching_interface_links() {
        check_interface(&vs(COLORED_VERTEX), &fs(COLORED_FRAGMENT), &pos_color()).unwrap();
    }

    #[test]
    fn unwritten_fragment_input_fails() {
        let fragment = "
            @fragment
            fn main(@location(3) uv: vec2<f32>) -> @location(0) vec4<f32> {
                return vec4<f32>(uv, 0.0, 1.0);
            }
        ";
        let err = check_interface(&vs(COLORED_VERTEX), &fs(fragment), &pos_color()).unwrap_err();
        assert!(matches!(err, ShaderError::Link { .. }));
        assert!(err.log().unwrap_or_default().contains("location 3"));
    }

    #[test]
    fn mismatched_varying_type_fails() {
        let fragment = "
            @fragment
            fn main(@location(0) color: vec4<f32>) -> @location(0) vec4<f32> {
                return color;
            }
        ";
        let err = check_interface(&vs(COLORED_VERTEX), &fs(fragment), &pos_color()).unwrap_err();
        assert!(err.log().unwrap_or_default().contains("type mismatch"));
    }

    #[test]
    fn vertex_input_without_slot_fails() {
        let positions_only = VertexLayout::interleaved(&[3]).unwrap();
        let err = check_interface(&vs(COLORED_VERTEX), &fs(COLORED_FRAGMENT), &positions_only)
            .unwrap_err();
        assert!(err.log().unwrap_or_default().contains("location 1"));
    }

    #[test]
    fn fragment_without_inputs_links_against_anything() {
        let fragment = "
            @fragment
            fn main() -> @location(0) vec4<f32> {
                return vec4<f32>(1.0, 0.5, 0.2, 1.0);
            }
        ";
        check_interface(&vs(COLORED_VERTEX), &fs(fragment), &pos_color()).unwrap();
    }

    #[test]
    fn swapped_stages_fail() {
        let err = check_interface(&fs(COLORED_FRAGMENT), &vs(COLORED_VERTEX), &pos_color())
            .unwrap_err();
        assert!(matches!(err, ShaderError::Link { .. }));
    }
}
