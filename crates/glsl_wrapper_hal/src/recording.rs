//! A [`Graphics`] that records native calls instead of issuing them.

use std::cell::RefCell;

use crate::{texture::TextureTarget, Graphics, UniformLocation};

#[derive(Debug, Clone, PartialEq)]
pub enum Values {
    F32(Vec<f32>),
    F64(Vec<f64>),
    U32(Vec<u32>),
    I32(Vec<i32>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum NativeCall {
    Uniform {
        function: &'static str,
        location: i32,
        transpose: Option<bool>,
        values: Values,
    },
    BindTexture {
        target: TextureTarget,
        texture: u32,
    },
}

impl NativeCall {
    pub fn uniform(
        function: &'static str,
        location: i32,
        transpose: Option<bool>,
        values: Values,
    ) -> Self {
        Self::Uniform {
            function,
            location,
            transpose,
            values,
        }
    }
}

#[derive(Default)]
pub struct RecordingGraphics {
    calls: RefCell<Vec<NativeCall>>,
}

impl RecordingGraphics {
    pub fn take(&self) -> Vec<NativeCall> {
        self.calls.take()
    }

    fn record(&self, call: NativeCall) {
        self.calls.borrow_mut().push(call);
    }
}

macro_rules! record_scalar {
    ($name:ident, $ty:ty, $values:ident) => {
        fn $name(&self, location: UniformLocation, x: $ty) {
            self.record(NativeCall::uniform(
                stringify!($name),
                location.0,
                None,
                Values::$values(vec![x]),
            ));
        }
    };
}

macro_rules! record_vector {
    ($name:ident, $ty:ty, $values:ident) => {
        fn $name(&self, location: UniformLocation, v: &[$ty]) {
            self.record(NativeCall::uniform(
                stringify!($name),
                location.0,
                None,
                Values::$values(v.to_vec()),
            ));
        }
    };
}

macro_rules! record_matrix {
    ($name:ident, $ty:ty, $values:ident) => {
        fn $name(&self, location: UniformLocation, transpose: bool, v: &[$ty]) {
            self.record(NativeCall::uniform(
                stringify!($name),
                location.0,
                Some(transpose),
                Values::$values(v.to_vec()),
            ));
        }
    };
}

impl Graphics for RecordingGraphics {
    record_scalar!(uniform_1_f32, f32, F32);
    record_scalar!(uniform_1_f64, f64, F64);
    record_scalar!(uniform_1_u32, u32, U32);
    record_scalar!(uniform_1_i32, i32, I32);

    record_vector!(uniform_2_f32_slice, f32, F32);
    record_vector!(uniform_3_f32_slice, f32, F32);
    record_vector!(uniform_4_f32_slice, f32, F32);
    record_vector!(uniform_2_f64_slice, f64, F64);
    record_vector!(uniform_3_f64_slice, f64, F64);
    record_vector!(uniform_4_f64_slice, f64, F64);
    record_vector!(uniform_2_u32_slice, u32, U32);
    record_vector!(uniform_3_u32_slice, u32, U32);
    record_vector!(uniform_4_u32_slice, u32, U32);
    record_vector!(uniform_2_i32_slice, i32, I32);
    record_vector!(uniform_3_i32_slice, i32, I32);
    record_vector!(uniform_4_i32_slice, i32, I32);

    record_matrix!(uniform_matrix_2_f32_slice, f32, F32);
    record_matrix!(uniform_matrix_3_f32_slice, f32, F32);
    record_matrix!(uniform_matrix_4_f32_slice, f32, F32);
    record_matrix!(uniform_matrix_2x3_f32_slice, f32, F32);
    record_matrix!(uniform_matrix_2x4_f32_slice, f32, F32);
    record_matrix!(uniform_matrix_3x2_f32_slice, f32, F32);
    record_matrix!(uniform_matrix_3x4_f32_slice, f32, F32);
    record_matrix!(uniform_matrix_4x2_f32_slice, f32, F32);
    record_matrix!(uniform_matrix_4x3_f32_slice, f32, F32);

    record_matrix!(uniform_matrix_2_f64_slice, f64, F64);
    record_matrix!(uniform_matrix_3_f64_slice, f64, F64);
    record_matrix!(uniform_matrix_4_f64_slice, f64, F64);
    record_matrix!(uniform_matrix_2x3_f64_slice, f64, F64);
    record_matrix!(uniform_matrix_2x4_f64_slice, f64, F64);
    record_matrix!(uniform_matrix_3x2_f64_slice, f64, F64);
    record_matrix!(uniform_matrix_3x4_f64_slice, f64, F64);
    record_matrix!(uniform_matrix_4x2_f64_slice, f64, F64);
    record_matrix!(uniform_matrix_4x3_f64_slice, f64, F64);

    fn bind_texture(&self, target: TextureTarget, texture: u32) {
        self.record(NativeCall::BindTexture { target, texture });
    }
}
