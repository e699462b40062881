use indoc::indoc;
use spvkit_bytecode::{
    AddressingModel, Capability, ExecutionModel, FunctionControl, MAGIC, MemoryModel, Op,
    SectionKind, StorageClass, Version, dump,
};
use spvkit_core::Palette;

use crate::{Module, ModuleConfig};

#[test]
fn empty_module_is_header_only() {
    let binary = Module::new().compile();

    assert_eq!(binary.words(), &[MAGIC, 0x0001_0000, 0, 1, 0]);
}

#[test]
fn ids_start_at_one_and_increase() {
    let mut module = Module::new();

    let a = module.allocate_id();
    let b = module.allocate_id();
    let c = module.allocate_id();

    assert_eq!([a, b, c].map(u32::from), [1, 2, 3]);
    assert_eq!(module.bound(), 4);
}

#[test]
fn header_records_bound_and_config() {
    let config = ModuleConfig::new()
        .version(Version::V1_3)
        .generator(0x0042_0001);
    let mut module = Module::with_config(config);
    module.def_void_type();
    module.def_bool_type();

    let header = *module.compile().header();
    assert_eq!(header.version, Version::V1_3);
    assert_eq!(header.generator, 0x0042_0001);
    assert_eq!(header.bound, 3);
    assert_eq!(header.schema, 0);
}

#[test]
fn compile_is_idempotent() {
    let mut module = Module::new();
    module.enable_capability(Capability::Shader);
    module.set_memory_model(AddressingModel::Logical, MemoryModel::GLSL450);
    module.const_u32(9);

    let first = module.compile();
    let second = module.compile();
    assert_eq!(first, second);
    assert_eq!(module.bound(), first.header().bound);
}

#[test]
fn compile_concatenates_sections_in_order() {
    let mut module = Module::new();
    // Deliberately out of binary order.
    let void = module.def_void_type();
    module.set_debug_name(void, "v");
    module.set_memory_model(AddressingModel::Logical, MemoryModel::Simple);
    module.enable_capability(Capability::Shader);

    let binary = module.compile();
    let ops: Vec<Op> = binary
        .instructions()
        .map(|i| i.unwrap().op().unwrap())
        .collect();

    assert_eq!(
        ops,
        vec![Op::Capability, Op::MemoryModel, Op::Name, Op::TypeVoid]
    );

    let expected_len: usize = SectionKind::ALL
        .iter()
        .map(|&kind| module.section(kind).word_len())
        .sum();
    assert_eq!(binary.word_len(), 5 + expected_len);
}

#[test]
fn append_raw_writes_verbatim() {
    let mut module = Module::new();
    module.append_raw(SectionKind::Code, Op::Nop, &[]);

    assert_eq!(module.section(SectionKind::Code).words(), &[0x0001_0000]);
    assert_eq!(module.bound(), 1);
}

#[test]
#[should_panic(expected = "OpTypeInt must be defined through the interner")]
fn append_raw_rejects_types() {
    let mut module = Module::new();
    module.append_raw(SectionKind::TypeConstDefs, Op::TypeInt, &[1, 32, 0]);
}

#[test]
#[should_panic(expected = "OpConstant must be defined through the interner")]
fn append_raw_rejects_constants() {
    let mut module = Module::new();
    let u32_ty = module.def_int_type(32, false);
    module.append_raw(SectionKind::TypeConstDefs, Op::Constant, &[u32_ty.as_u32(), 2, 7]);
}

#[test]
#[should_panic(expected = "OpCapability belongs to capabilities, not code")]
fn append_raw_rejects_wrong_section() {
    let mut module = Module::new();
    module.append_raw(SectionKind::Code, Op::Capability, &[1]);
}

#[test]
fn append_raw_accepts_alternate_sections() {
    let mut module = Module::new();
    let u32_ty = module.def_int_type(32, false);
    let undef = module.allocate_id();
    module.append_raw(
        SectionKind::TypeConstDefs,
        Op::Undef,
        &[u32_ty.as_u32(), undef.as_u32()],
    );
    let ptr = module.def_pointer_type(u32_ty, StorageClass::Function);
    let local = module.allocate_id();
    module.append_raw(
        SectionKind::Code,
        Op::Variable,
        &[ptr.as_u32(), local.as_u32(), StorageClass::Function.word()],
    );

    assert_eq!(module.section(SectionKind::TypeConstDefs).instructions().count(), 3);
    assert_eq!(module.section(SectionKind::Code).instructions().count(), 1);
    assert!(module.section(SectionKind::GlobalVariables).is_empty());
}

#[test]
fn default_config() {
    let config = ModuleConfig::default();

    assert_eq!(config.get_version(), Version::V1_0);
    assert_eq!(config.get_generator(), 0);
    assert!(config.get_debug_names());
    assert_eq!(*Module::new().config(), config);
}

#[test]
fn module_is_send() {
    fn assert_send<T: Send>() {}
    assert_send::<Module>();
}

#[test]
fn minimal_fragment_shader_dump() {
    let mut module = Module::new();
    module.enable_capability(Capability::Shader);
    module.set_memory_model(AddressingModel::Logical, MemoryModel::GLSL450);
    let void = module.def_void_type();
    let main_ty = module.def_function_type(void, &[]);
    let main = module.allocate_id();
    module.add_entry_point(ExecutionModel::Fragment, main, "main", &[]);
    module.set_origin_upper_left(main);
    module.set_debug_name(main, "main");
    module.function_begin(void, main, main_ty, FunctionControl::NONE);
    let entry = module.allocate_id();
    module.op_label(entry);
    module.op_return();
    module.function_end();

    let out = dump(&module.compile(), Palette::PLAIN);

    assert_eq!(
        out,
        indoc! {r#"
            ; SPIR-V
            ; Version: 1.0
            ; Generator: 0x00000000
            ; Bound: 5
            ; Schema: 0

            [capabilities]
                 OpCapability Shader

            [memory_model]
                 OpMemoryModel Logical GLSL450

            [entry_points]
                 OpEntryPoint Fragment %3 "main"

            [execution_modes]
                 OpExecutionMode %3 OriginUpperLeft

            [debug_names]
                 OpName %3 "main"

            [types_constants]
            %1 = OpTypeVoid
            %2 = OpTypeFunction %1

            [code]
            %3 = OpFunction %1 None %2
            %4 = OpLabel
                 OpReturn
                 OpFunctionEnd
        "#}
    );
}
