//! Type definitions. Every builder here is a thin caller of
//! [`Module::define_type`], so identical requests share one id.

use spvkit_bytecode::{Dim, ImageFormat, Op, StorageClass};
use spvkit_core::Id;

use crate::Module;
use crate::module::id_words;

/// Operands of `OpTypeImage` after the sampled type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageType {
    pub dim: Dim,
    /// 0 = not depth, 1 = depth, 2 = unknown.
    pub depth: u32,
    pub arrayed: bool,
    pub multisampled: bool,
    /// 0 = known at runtime, 1 = used with a sampler, 2 = storage image.
    pub sampled: u32,
    pub format: ImageFormat,
}

impl Module {
    pub fn def_void_type(&mut self) -> Id {
        self.define_type(Op::TypeVoid, &[])
    }

    pub fn def_bool_type(&mut self) -> Id {
        self.define_type(Op::TypeBool, &[])
    }

    pub fn def_int_type(&mut self, width: u32, signed: bool) -> Id {
        self.define_type(Op::TypeInt, &[width, signed as u32])
    }

    pub fn def_float_type(&mut self, width: u32) -> Id {
        self.define_type(Op::TypeFloat, &[width])
    }

    pub fn def_vector_type(&mut self, component: Id, count: u32) -> Id {
        self.define_type(Op::TypeVector, &[component.as_u32(), count])
    }

    pub fn def_matrix_type(&mut self, column: Id, count: u32) -> Id {
        self.define_type(Op::TypeMatrix, &[column.as_u32(), count])
    }

    /// Fixed-size array. `length` is the id of an integer constant, not a
    /// literal.
    pub fn def_array_type(&mut self, element: Id, length: Id) -> Id {
        self.define_type(Op::TypeArray, &[element.as_u32(), length.as_u32()])
    }

    pub fn def_runtime_array_type(&mut self, element: Id) -> Id {
        self.define_type(Op::TypeRuntimeArray, &[element.as_u32()])
    }

    pub fn def_struct_type(&mut self, members: &[Id]) -> Id {
        let operands: Vec<u32> = id_words(members).collect();
        self.define_type(Op::TypeStruct, &operands)
    }

    /// Pointer to `pointee`. Operand order follows the encoding: storage
    /// class first.
    pub fn def_pointer_type(&mut self, pointee: Id, storage_class: StorageClass) -> Id {
        self.define_type(
            Op::TypePointer,
            &[storage_class.word(), pointee.as_u32()],
        )
    }

    pub fn def_function_type(&mut self, return_type: Id, params: &[Id]) -> Id {
        let mut operands = Vec::with_capacity(params.len() + 1);
        operands.push(return_type.as_u32());
        operands.extend(id_words(params));
        self.define_type(Op::TypeFunction, &operands)
    }

    pub fn def_sampler_type(&mut self) -> Id {
        self.define_type(Op::TypeSampler, &[])
    }

    pub fn def_image_type(&mut self, sampled_type: Id, image: ImageType) -> Id {
        self.define_type(
            Op::TypeImage,
            &[
                sampled_type.as_u32(),
                image.dim.word(),
                image.depth,
                image.arrayed as u32,
                image.multisampled as u32,
                image.sampled,
                image.format.word(),
            ],
        )
    }

    pub fn def_sampled_image_type(&mut self, image_type: Id) -> Id {
        self.define_type(Op::TypeSampledImage, &[image_type.as_u32()])
    }
}
