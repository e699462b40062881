//! Built-in compute shader.
//!
//! Equivalent GLSL:
//!
//! ```glsl
//! layout(local_size_x = 64) in;
//! layout(set = 0, binding = 0) buffer Data { uint values[]; };
//! void main() {
//!     uint x = gl_GlobalInvocationID.x;
//!     values[x] = x * 2u;
//! }
//! ```

use std::path::PathBuf;

use spvkit_assembler::{Module, ModuleConfig};
use spvkit_bytecode::{
    AddressingModel, BuiltIn, Capability, Decoration, ExecutionModel, FunctionControl,
    MemoryModel, Op, StorageClass, Version, dump,
};
use spvkit_core::Palette;
use tracing::info;

use super::{CommandError, exit_on_error};

pub struct DemoArgs {
    pub output: Option<PathBuf>,
    pub version: Version,
    pub generator: u32,
    pub debug_names: bool,
    pub color: bool,
}

pub fn run(args: DemoArgs) {
    exit_on_error(execute(&args));
}

fn execute(args: &DemoArgs) -> Result<(), CommandError> {
    let config = ModuleConfig::new()
        .version(args.version)
        .generator(args.generator)
        .debug_names(args.debug_names);
    let module = build_module(config);
    module.check_structure()?;
    let binary = module.compile();

    match &args.output {
        Some(path) => {
            std::fs::write(path, binary.to_bytes()).map_err(|source| CommandError::Write {
                path: path.clone(),
                source,
            })?;
            info!(
                words = binary.word_len(),
                path = %path.display(),
                "wrote module"
            );
        }
        None => print!("{}", dump(&binary, Palette::new(args.color))),
    }
    Ok(())
}

/// Assemble the demo shader.
///
/// From 1.3 on the buffer uses the `StorageBuffer` storage class with a
/// `Block` decoration; earlier versions use `Uniform` with `BufferBlock`.
/// From 1.4 on the entry point interface lists every global it touches.
pub fn build_module(config: ModuleConfig) -> Module {
    let version = config.get_version();
    let (buffer_class, buffer_decoration) = if version >= Version::V1_3 {
        (StorageClass::StorageBuffer, Decoration::Block)
    } else {
        (StorageClass::Uniform, Decoration::BufferBlock)
    };

    let mut m = Module::with_config(config);
    m.enable_capability(Capability::Shader);
    m.set_memory_model(AddressingModel::Logical, MemoryModel::GLSL450);

    let void = m.def_void_type();
    let main_ty = m.def_function_type(void, &[]);
    let u32_ty = m.def_int_type(32, false);
    let uvec3 = m.def_vector_type(u32_ty, 3);

    let values = m.def_runtime_array_type(u32_ty);
    m.decorate(values, Decoration::ArrayStride, &[4]);
    let data_ty = m.def_struct_type(&[values]);
    m.decorate(data_ty, buffer_decoration, &[]);
    m.member_decorate_offset(data_ty, 0, 0);
    m.set_debug_name(data_ty, "Data");
    m.set_debug_member_name(data_ty, 0, "values");

    let data_ptr = m.def_pointer_type(data_ty, buffer_class);
    let data = m.new_var(data_ptr, buffer_class);
    m.decorate_descriptor_set(data, 0);
    m.decorate_binding(data, 0);
    m.set_debug_name(data, "data");

    let gid_ptr = m.def_pointer_type(uvec3, StorageClass::Input);
    let gid = m.new_var(gid_ptr, StorageClass::Input);
    m.decorate_builtin(gid, BuiltIn::GlobalInvocationId);
    m.set_debug_name(gid, "gl_GlobalInvocationID");

    let main = m.allocate_id();
    let interface = if version >= Version::new(1, 4) {
        vec![gid, data]
    } else {
        vec![gid]
    };
    m.add_entry_point(ExecutionModel::GLCompute, main, "main", &interface);
    m.set_local_size(main, 64, 1, 1);
    m.set_debug_name(main, "main");

    m.function_begin(void, main, main_ty, FunctionControl::NONE);
    let entry = m.allocate_id();
    m.op_label(entry);

    let ids = m.op_load(uvec3, gid);
    let x = m.op_composite_extract(u32_ty, ids, &[0]);
    let two = m.const_u32(2);
    let doubled = m.op_binary(Op::IMul, u32_ty, x, two);

    let member = m.const_u32(0);
    let elem_ptr = m.def_pointer_type(u32_ty, buffer_class);
    let slot = m.op_access_chain(elem_ptr, data, &[member, x]);
    m.op_store(slot, doubled);

    m.op_return();
    m.function_end();
    m
}
