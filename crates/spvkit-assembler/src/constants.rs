//! Constant definitions.
//!
//! Scalar constants define their own type. 64-bit literals are written low
//! word first.

use spvkit_bytecode::Op;
use spvkit_core::Id;

use crate::Module;
use crate::module::id_words;

fn split_u64(value: u64) -> [u32; 2] {
    [value as u32, (value >> 32) as u32]
}

impl Module {
    pub fn const_bool(&mut self, value: bool) -> Id {
        let ty = self.def_bool_type();
        let op = if value {
            Op::ConstantTrue
        } else {
            Op::ConstantFalse
        };
        self.define_const(op, ty, &[])
    }

    pub fn const_i32(&mut self, value: i32) -> Id {
        let ty = self.def_int_type(32, true);
        self.define_const(Op::Constant, ty, &[value as u32])
    }

    pub fn const_u32(&mut self, value: u32) -> Id {
        let ty = self.def_int_type(32, false);
        self.define_const(Op::Constant, ty, &[value])
    }

    pub fn const_i64(&mut self, value: i64) -> Id {
        let ty = self.def_int_type(64, true);
        self.define_const(Op::Constant, ty, &split_u64(value as u64))
    }

    pub fn const_u64(&mut self, value: u64) -> Id {
        let ty = self.def_int_type(64, false);
        self.define_const(Op::Constant, ty, &split_u64(value))
    }

    /// Keyed by bit pattern: `0.0` and `-0.0` are distinct constants.
    pub fn const_f32(&mut self, value: f32) -> Id {
        let ty = self.def_float_type(32);
        self.define_const(Op::Constant, ty, &[value.to_bits()])
    }

    pub fn const_f64(&mut self, value: f64) -> Id {
        let ty = self.def_float_type(64);
        self.define_const(Op::Constant, ty, &split_u64(value.to_bits()))
    }

    pub fn const_composite(&mut self, type_id: Id, constituents: &[Id]) -> Id {
        let literals: Vec<u32> = id_words(constituents).collect();
        self.define_const(Op::ConstantComposite, type_id, &literals)
    }

    /// Zero value of `type_id`.
    pub fn const_null(&mut self, type_id: Id) -> Id {
        self.define_const(Op::ConstantNull, type_id, &[])
    }
}
