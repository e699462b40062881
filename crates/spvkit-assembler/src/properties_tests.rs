//! Whole-module properties checked over randomly driven builders.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spvkit_bytecode::{
    AddressingModel, Capability, Decoration, ExecutionModel, FunctionControl, MemoryModel, Op,
    SectionKind, StorageClass,
};
use spvkit_core::Id;
use spvkit_core::words::str_word_count;

use crate::Module;
use crate::test_utils::count_op;

const CAPABILITIES: [Capability; 4] = [
    Capability::Shader,
    Capability::Float64,
    Capability::Int64,
    Capability::Int16,
];

fn random_name(rng: &mut StdRng) -> String {
    let len = rng.gen_range(0..12);
    (0..len)
        .map(|_| char::from(rng.gen_range(b'a'..=b'z')))
        .collect()
}

fn pick(rng: &mut StdRng, ids: &[Id]) -> Id {
    ids[rng.gen_range(0..ids.len())]
}

/// Drive `steps` random builder calls. Returns the module and the number of
/// words each call was expected to add.
fn random_module(seed: u64, steps: usize) -> (Module, usize) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut module = Module::new();
    let mut expected = 0usize;

    let u32_ty = module.def_int_type(32, false);
    expected += 4;
    let mut values = vec![u32_ty];

    for _ in 0..steps {
        let before: usize = SectionKind::ALL
            .iter()
            .map(|&k| module.section(k).word_len())
            .sum();
        let mut added: Option<usize> = None;

        match rng.gen_range(0..12) {
            0 => module.enable_capability(CAPABILITIES[rng.gen_range(0..CAPABILITIES.len())]),
            1 => {
                module.set_memory_model(AddressingModel::Logical, MemoryModel::GLSL450);
                added = Some(3);
            }
            2 => {
                let name = random_name(&mut rng);
                let id = pick(&mut rng, &values);
                module.set_debug_name(id, &name);
                added = Some(2 + str_word_count(&name));
            }
            3 => {
                let name = random_name(&mut rng);
                let count = rng.gen_range(0..4);
                let interface: Vec<Id> = (0..count).map(|_| pick(&mut rng, &values)).collect();
                let entry = module.allocate_id();
                module.add_entry_point(ExecutionModel::GLCompute, entry, &name, &interface);
                added = Some(3 + str_word_count(&name) + count);
            }
            4 => {
                let id = pick(&mut rng, &values);
                let literals: Vec<u32> = (0..rng.gen_range(0..3)).map(|_| rng.r#gen()).collect();
                module.decorate(id, Decoration::Location, &literals);
                added = Some(3 + literals.len());
            }
            5 => {
                let width = [8, 16, 32, 64][rng.gen_range(0..4)];
                let ty = module.def_int_type(width, rng.gen_bool(0.5));
                values.push(ty);
            }
            6 => {
                let v = module.const_u32(rng.gen_range(0..16));
                values.push(v);
            }
            7 => {
                let members: Vec<Id> = (0..rng.gen_range(0..5))
                    .map(|_| pick(&mut rng, &values))
                    .collect();
                let ty = module.def_struct_type(&members);
                values.push(ty);
            }
            8 => {
                let pointee = pick(&mut rng, &values);
                let ptr = module.def_pointer_type(pointee, StorageClass::Private);
                let var = module.new_var(ptr, StorageClass::Private);
                values.push(var);
            }
            9 => {
                let lhs = pick(&mut rng, &values);
                let rhs = pick(&mut rng, &values);
                let v = module.op_binary(Op::IAdd, u32_ty, lhs, rhs);
                values.push(v);
                added = Some(5);
            }
            10 => {
                let indices: Vec<u32> = (0..rng.gen_range(1..4)).map(|_| rng.gen_range(0..4)).collect();
                let composite = pick(&mut rng, &values);
                let v = module.op_composite_extract(u32_ty, composite, &indices);
                values.push(v);
                added = Some(4 + indices.len());
            }
            _ => {
                let pointer = pick(&mut rng, &values);
                let value = pick(&mut rng, &values);
                module.op_store(pointer, value);
                added = Some(3);
            }
        }

        let after: usize = SectionKind::ALL
            .iter()
            .map(|&k| module.section(k).word_len())
            .sum();
        if let Some(words) = added {
            assert_eq!(after - before, words, "seed {seed}: unexpected word count");
        }
        expected += after - before;
    }

    (module, expected)
}

#[test]
fn every_instruction_decodes_on_a_boundary() {
    for seed in 0..16 {
        let (module, expected) = random_module(seed, 200);

        let mut total = 0;
        for kind in SectionKind::ALL {
            let section = module.section(kind);
            let mut walked = 0;
            for inst in section.instructions() {
                let inst = inst.unwrap();
                assert_eq!(inst.offset(), walked);
                walked += inst.word_count();
            }
            assert_eq!(walked, section.word_len(), "seed {seed}: {kind}");
            total += walked;
        }
        assert_eq!(total, expected);
    }
}

#[test]
fn compiled_sections_stay_in_order() {
    for seed in 0..16 {
        let (module, _) = random_module(seed, 200);
        let binary = module.compile();

        let regions = binary.regions().unwrap();
        for pair in regions.windows(2) {
            assert!(pair[0].kind < pair[1].kind, "seed {seed}: {pair:?}");
        }
    }
}

#[test]
fn result_ids_are_unique_and_below_bound() {
    for seed in 0..16 {
        let (module, _) = random_module(seed, 200);
        let binary = module.compile();
        let bound = binary.header().bound;

        let mut seen = HashSet::new();
        for kind in [
            SectionKind::TypeConstDefs,
            SectionKind::GlobalVariables,
            SectionKind::Code,
        ] {
            for inst in module.section(kind).instructions() {
                let Some(id) = inst.unwrap().result_id() else {
                    continue;
                };
                assert!(id.as_u32() > 0 && id.as_u32() < bound);
                assert!(seen.insert(id), "seed {seed}: {id} defined twice");
            }
        }
    }
}

#[test]
fn ids_are_strictly_increasing() {
    let mut module = Module::new();
    let mut last = 0;
    for i in 0..1000u32 {
        let id = if i % 2 == 0 {
            module.allocate_id()
        } else {
            // Fresh constants always allocate.
            module.const_u32(i)
        };
        assert!(id.as_u32() > last);
        last = id.as_u32();
    }
}

#[test]
fn types_are_interned_once() {
    for seed in 0..16 {
        let (module, _) = random_module(seed, 300);

        let mut keys = HashSet::new();
        for inst in module.section(SectionKind::TypeConstDefs).instructions() {
            let inst = inst.unwrap();
            let op = inst.op().unwrap();
            let index = op.shape().result_index().unwrap();
            let mut key = inst.operands().to_vec();
            key.remove(index);
            assert!(keys.insert((op, key)), "seed {seed}: duplicate definition");
        }
        assert_eq!(keys.len(), module.definition_count());
    }
}

#[test]
fn capabilities_are_declared_once() {
    for seed in 0..16 {
        let (module, _) = random_module(seed, 300);

        let caps: Vec<u32> = module
            .section(SectionKind::Capabilities)
            .instructions()
            .map(|i| i.unwrap().operands()[0])
            .collect();
        let unique: HashSet<u32> = caps.iter().copied().collect();
        assert_eq!(caps.len(), unique.len());
    }
}

#[test]
fn section_order_ignores_call_order() {
    let mut module = Module::new();
    let void = module.def_void_type();
    let fn_ty = module.def_function_type(void, &[]);
    let main = module.allocate_id();
    module.function_begin(void, main, fn_ty, FunctionControl::NONE);
    let label = module.allocate_id();
    module.op_label(label);
    module.op_return();
    module.function_end();
    module.set_debug_name(main, "main");
    module.decorate_location(main, 0);
    module.add_entry_point(ExecutionModel::Vertex, main, "main", &[]);
    module.set_memory_model(AddressingModel::Logical, MemoryModel::GLSL450);
    module.enable_capability(Capability::Shader);

    let counts = module.compile().section_counts().unwrap();
    assert_eq!(counts, [1, 1, 1, 0, 1, 1, 2, 0, 4]);
}

#[test]
fn scenario_int_types() {
    let mut module = Module::new();
    module.def_int_type(32, false);
    module.def_int_type(32, false);
    module.def_int_type(32, true);

    assert_eq!(count_op(&module, Op::TypeInt), 2);
}

#[test]
fn scenario_shader_capability() {
    let mut module = Module::new();
    for _ in 0..3 {
        module.enable_capability(Capability::Shader);
    }

    assert_eq!(count_op(&module, Op::Capability), 1);
    assert_eq!(module.section(SectionKind::Capabilities).word_len(), 2);
}
