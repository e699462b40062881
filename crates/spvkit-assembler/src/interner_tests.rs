use spvkit_bytecode::{Dim, ImageFormat, Op, SectionKind, StorageClass};
use spvkit_core::Id;

use crate::test_utils::{count_op, decode};
use crate::{ImageType, Module};

#[test]
fn int_types_intern_by_width_and_signedness() {
    let mut module = Module::new();
    let a = module.def_int_type(32, false);
    let b = module.def_int_type(32, false);
    let c = module.def_int_type(32, true);

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(count_op(&module, Op::TypeInt), 2);
    assert_eq!(
        decode(&module, SectionKind::TypeConstDefs),
        vec![
            (Op::TypeInt, vec![a.as_u32(), 32, 0]),
            (Op::TypeInt, vec![c.as_u32(), 32, 1]),
        ]
    );
}

#[test]
fn repeated_definition_allocates_nothing() {
    let mut module = Module::new();
    module.def_float_type(32);
    let bound = module.bound();
    let words = module.section(SectionKind::TypeConstDefs).word_len();

    module.def_float_type(32);

    assert_eq!(module.bound(), bound);
    assert_eq!(module.section(SectionKind::TypeConstDefs).word_len(), words);
    assert_eq!(module.definition_count(), 1);
}

#[test]
fn pointer_operands_put_storage_class_first() {
    let mut module = Module::new();
    let f32_ty = module.def_float_type(32);
    let ptr = module.def_pointer_type(f32_ty, StorageClass::Input);

    let defs = decode(&module, SectionKind::TypeConstDefs);
    assert_eq!(
        defs[1],
        (Op::TypePointer, vec![ptr.as_u32(), 1, f32_ty.as_u32()])
    );
    assert_ne!(ptr, module.def_pointer_type(f32_ty, StorageClass::Output));
}

#[test]
fn operand_length_is_part_of_the_key() {
    let mut module = Module::new();
    let void = module.def_void_type();
    let int = module.def_int_type(32, true);

    let nullary = module.def_function_type(void, &[]);
    let unary = module.def_function_type(void, &[int]);
    let binary = module.def_function_type(void, &[int, int]);

    assert_ne!(nullary, unary);
    assert_ne!(unary, binary);
    assert_eq!(module.def_function_type(void, &[int]), unary);
    assert_eq!(count_op(&module, Op::TypeFunction), 3);
}

#[test]
fn composite_types() {
    let mut module = Module::new();
    let f32_ty = module.def_float_type(32);
    let vec4 = module.def_vector_type(f32_ty, 4);
    let mat4 = module.def_matrix_type(vec4, 4);
    let len = module.const_u32(8);
    let array = module.def_array_type(vec4, len);
    let runtime = module.def_runtime_array_type(vec4);
    let block = module.def_struct_type(&[mat4, array, runtime]);

    assert_eq!(module.def_vector_type(f32_ty, 4), vec4);
    assert_ne!(module.def_vector_type(f32_ty, 3), vec4);
    assert_eq!(module.def_struct_type(&[mat4, array, runtime]), block);
    assert_ne!(module.def_struct_type(&[mat4, array]), block);

    let defs = decode(&module, SectionKind::TypeConstDefs);
    assert!(defs.contains(&(
        Op::TypeStruct,
        vec![block.as_u32(), mat4.as_u32(), array.as_u32(), runtime.as_u32()]
    )));
    assert!(defs.contains(&(Op::TypeArray, vec![array.as_u32(), vec4.as_u32(), len.as_u32()])));
}

#[test]
fn image_and_sampler_types() {
    let mut module = Module::new();
    let f32_ty = module.def_float_type(32);
    let desc = ImageType {
        dim: Dim::Dim2D,
        depth: 0,
        arrayed: false,
        multisampled: false,
        sampled: 1,
        format: ImageFormat::Unknown,
    };
    let image = module.def_image_type(f32_ty, desc);
    let sampled = module.def_sampled_image_type(image);
    let sampler = module.def_sampler_type();

    assert_eq!(module.def_image_type(f32_ty, desc), image);
    assert_ne!(sampled, image);
    assert_eq!(module.def_sampler_type(), sampler);

    let defs = decode(&module, SectionKind::TypeConstDefs);
    assert_eq!(
        defs[1],
        (Op::TypeImage, vec![image.as_u32(), f32_ty.as_u32(), 1, 0, 0, 0, 1, 0])
    );
}

#[test]
fn constants_share_their_scalar_type() {
    let mut module = Module::new();
    let a = module.const_i32(-1);
    let b = module.const_i32(-1);
    let c = module.const_i32(2);
    let int = module.def_int_type(32, true);

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(count_op(&module, Op::TypeInt), 1);
    assert_eq!(
        decode(&module, SectionKind::TypeConstDefs)[1],
        (Op::Constant, vec![int.as_u32(), a.as_u32(), 0xFFFF_FFFF])
    );
}

#[test]
fn signed_and_unsigned_constants_differ() {
    let mut module = Module::new();

    assert_ne!(module.const_i32(5), module.const_u32(5));
    assert_eq!(count_op(&module, Op::Constant), 2);
}

#[test]
fn wide_constants_are_low_word_first() {
    let mut module = Module::new();
    let c = module.const_u64(0x0000_0001_0000_0002);
    let d = module.const_i64(-2);
    let e = module.const_f64(1.0);

    let defs = decode(&module, SectionKind::TypeConstDefs);
    let literals = |id: Id| {
        defs.iter()
            .find(|(op, words)| *op == Op::Constant && words[1] == id.as_u32())
            .map(|(_, words)| words[2..].to_vec())
            .unwrap()
    };

    assert_eq!(literals(c), vec![2, 1]);
    assert_eq!(literals(d), vec![0xFFFF_FFFE, 0xFFFF_FFFF]);
    assert_eq!(literals(e), vec![0, 0x3FF0_0000]);
}

#[test]
fn float_constants_key_on_bits() {
    let mut module = Module::new();
    let pos = module.const_f32(0.0);
    let neg = module.const_f32(-0.0);

    assert_ne!(pos, neg);
    assert_eq!(module.const_f32(0.0), pos);
}

#[test]
fn bool_constants() {
    let mut module = Module::new();
    let t = module.const_bool(true);
    let f = module.const_bool(false);

    assert_ne!(t, f);
    assert_eq!(module.const_bool(true), t);
    assert_eq!(count_op(&module, Op::TypeBool), 1);
    assert_eq!(count_op(&module, Op::ConstantTrue), 1);
    assert_eq!(count_op(&module, Op::ConstantFalse), 1);
}

#[test]
fn composite_and_null_constants() {
    let mut module = Module::new();
    let f32_ty = module.def_float_type(32);
    let vec2 = module.def_vector_type(f32_ty, 2);
    let one = module.const_f32(1.0);
    let two = module.const_f32(2.0);

    let a = module.const_composite(vec2, &[one, two]);
    let b = module.const_composite(vec2, &[two, one]);
    let zero = module.const_null(vec2);

    assert_ne!(a, b);
    assert_eq!(module.const_composite(vec2, &[one, two]), a);
    assert_eq!(module.const_null(vec2), zero);
    assert_ne!(module.const_null(f32_ty), zero);
}

#[test]
fn definitions_follow_their_operands() {
    let mut module = Module::new();
    let f32_ty = module.def_float_type(32);
    let vec3 = module.def_vector_type(f32_ty, 3);
    let ptr = module.def_pointer_type(vec3, StorageClass::Uniform);

    let result_ids: Vec<u32> = decode(&module, SectionKind::TypeConstDefs)
        .into_iter()
        .map(|(_, words)| words[0])
        .collect();
    assert_eq!(result_ids, [f32_ty, vec3, ptr].map(Id::as_u32).to_vec());
}

#[test]
fn scan_agrees_with_index() {
    let mut module = Module::new();
    let void = module.def_void_type();
    let u32_ty = module.def_int_type(32, false);
    let seven = module.const_u32(7);
    let fn_ty = module.def_function_type(void, &[u32_ty]);

    assert_eq!(module.scan_type_section(Op::TypeVoid, &[]), Some(void));
    assert_eq!(module.scan_type_section(Op::TypeInt, &[32, 0]), Some(u32_ty));
    assert_eq!(
        module.scan_type_section(Op::Constant, &[u32_ty.as_u32(), 7]),
        Some(seven)
    );
    assert_eq!(
        module.scan_type_section(Op::TypeFunction, &[void.as_u32(), u32_ty.as_u32()]),
        Some(fn_ty)
    );

    assert_eq!(module.scan_type_section(Op::TypeInt, &[32, 1]), None);
    assert_eq!(module.scan_type_section(Op::TypeInt, &[32]), None);
    assert_eq!(module.scan_type_section(Op::TypeFunction, &[void.as_u32()]), None);
}
