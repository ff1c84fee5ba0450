//! Uniform entry points `glow` doesn't wrap: double precision uniforms
//! (GL 4.0 / `ARB_gpu_shader_fp64`) and non-square float matrices (GL 2.1).
//! They are resolved through the window backend like the rest of the context.

use std::ffi::c_void;

use glsl_wrapper_hal::UniformLocation;

use crate::{Error, Result};

type Uniform1d = unsafe extern "system" fn(location: i32, x: f64);
type UniformVector<T> = unsafe extern "system" fn(location: i32, count: i32, value: *const T);
type UniformMatrix<T> =
    unsafe extern "system" fn(location: i32, count: i32, transpose: u8, value: *const T);

unsafe fn load_function<F: Copy>(
    loader: &mut impl FnMut(&str) -> *const c_void,
    symbol: &str,
) -> Option<F> {
    let ptr = loader(symbol);
    if ptr.is_null() {
        log::warn!("{symbol} is not available, uploads relying on it will be skipped");
        return None;
    }

    Some(std::mem::transmute_copy::<*const c_void, F>(&ptr))
}

fn missing(symbol: &'static str) {
    log::error!("{symbol} is not available in the current GL context, uniform upload skipped");
}

macro_rules! extended_functions {
    ($($field:ident: $ty:ty = $symbol:literal,)*) => {
        #[derive(Default, Clone, Copy)]
        pub struct ExtendedFunctions {
            $($field: Option<$ty>,)*
        }

        impl ExtendedFunctions {
            /// # Safety
            ///
            /// `loader` must return either null or a pointer to the entry point
            /// named by its argument, valid for the context the functions are
            /// called on.
            pub unsafe fn load(mut loader: impl FnMut(&str) -> *const c_void) -> Self {
                Self {
                    $($field: load_function(&mut loader, $symbol),)*
                }
            }

            /// Fails with [`Error::MissingFunction`] if `symbol` wasn't resolved.
            pub fn require(&self, symbol: &'static str) -> Result<()> {
                let loaded = match symbol {
                    $($symbol => self.$field.is_some(),)*
                    _ => false,
                };

                match loaded {
                    true => Ok(()),
                    false => Err(Error::MissingFunction(symbol)),
                }
            }
        }
    };
}

extended_functions! {
    uniform_1d: Uniform1d = "glUniform1d",
    uniform_2dv: UniformVector<f64> = "glUniform2dv",
    uniform_3dv: UniformVector<f64> = "glUniform3dv",
    uniform_4dv: UniformVector<f64> = "glUniform4dv",

    uniform_matrix_2x3fv: UniformMatrix<f32> = "glUniformMatrix2x3fv",
    uniform_matrix_2x4fv: UniformMatrix<f32> = "glUniformMatrix2x4fv",
    uniform_matrix_3x2fv: UniformMatrix<f32> = "glUniformMatrix3x2fv",
    uniform_matrix_3x4fv: UniformMatrix<f32> = "glUniformMatrix3x4fv",
    uniform_matrix_4x2fv: UniformMatrix<f32> = "glUniformMatrix4x2fv",
    uniform_matrix_4x3fv: UniformMatrix<f32> = "glUniformMatrix4x3fv",

    uniform_matrix_2dv: UniformMatrix<f64> = "glUniformMatrix2dv",
    uniform_matrix_3dv: UniformMatrix<f64> = "glUniformMatrix3dv",
    uniform_matrix_4dv: UniformMatrix<f64> = "glUniformMatrix4dv",
    uniform_matrix_2x3dv: UniformMatrix<f64> = "glUniformMatrix2x3dv",
    uniform_matrix_2x4dv: UniformMatrix<f64> = "glUniformMatrix2x4dv",
    uniform_matrix_3x2dv: UniformMatrix<f64> = "glUniformMatrix3x2dv",
    uniform_matrix_3x4dv: UniformMatrix<f64> = "glUniformMatrix3x4dv",
    uniform_matrix_4x2dv: UniformMatrix<f64> = "glUniformMatrix4x2dv",
    uniform_matrix_4x3dv: UniformMatrix<f64> = "glUniformMatrix4x3dv",
}

fn vector<T>(
    function: Option<UniformVector<T>>,
    symbol: &'static str,
    location: UniformLocation,
    components: usize,
    v: &[T],
) {
    match function {
        Some(function) => unsafe {
            function(location.0, (v.len() / components) as i32, v.as_ptr())
        },
        None => missing(symbol),
    }
}

fn matrix<T>(
    function: Option<UniformMatrix<T>>,
    symbol: &'static str,
    location: UniformLocation,
    elements: usize,
    transpose: bool,
    v: &[T],
) {
    match function {
        Some(function) => unsafe {
            function(
                location.0,
                (v.len() / elements) as i32,
                transpose as u8,
                v.as_ptr(),
            )
        },
        None => missing(symbol),
    }
}

impl ExtendedFunctions {
    pub fn supports_double_precision(&self) -> bool {
        self.uniform_1d.is_some()
            && self.uniform_2dv.is_some()
            && self.uniform_3dv.is_some()
            && self.uniform_4dv.is_some()
            && self.uniform_matrix_2dv.is_some()
            && self.uniform_matrix_3dv.is_some()
            && self.uniform_matrix_4dv.is_some()
            && self.uniform_matrix_2x3dv.is_some()
            && self.uniform_matrix_2x4dv.is_some()
            && self.uniform_matrix_3x2dv.is_some()
            && self.uniform_matrix_3x4dv.is_some()
            && self.uniform_matrix_4x2dv.is_some()
            && self.uniform_matrix_4x3dv.is_some()
    }

    pub fn uniform_1_f64(&self, location: UniformLocation, x: f64) {
        match self.uniform_1d {
            Some(function) => unsafe { function(location.0, x) },
            None => missing("glUniform1d"),
        }
    }

    pub fn uniform_2_f64_slice(&self, location: UniformLocation, v: &[f64]) {
        vector(self.uniform_2dv, "glUniform2dv", location, 2, v);
    }

    pub fn uniform_3_f64_slice(&self, location: UniformLocation, v: &[f64]) {
        vector(self.uniform_3dv, "glUniform3dv", location, 3, v);
    }

    pub fn uniform_4_f64_slice(&self, location: UniformLocation, v: &[f64]) {
        vector(self.uniform_4dv, "glUniform4dv", location, 4, v);
    }

    pub fn uniform_matrix_2x3_f32_slice(&self, location: UniformLocation, transpose: bool, v: &[f32]) {
        let symbol = "glUniformMatrix2x3fv";
        matrix(self.uniform_matrix_2x3fv, symbol, location, 6, transpose, v);
    }

    pub fn uniform_matrix_2x4_f32_slice(&self, location: UniformLocation, transpose: bool, v: &[f32]) {
        let symbol = "glUniformMatrix2x4fv";
        matrix(self.uniform_matrix_2x4fv, symbol, location, 8, transpose, v);
    }

    pub fn uniform_matrix_3x2_f32_slice(&self, location: UniformLocation, transpose: bool, v: &[f32]) {
        let symbol = "glUniformMatrix3x2fv";
        matrix(self.uniform_matrix_3x2fv, symbol, location, 6, transpose, v);
    }

    pub fn uniform_matrix_3x4_f32_slice(&self, location: UniformLocation, transpose: bool, v: &[f32]) {
        let symbol = "glUniformMatrix3x4fv";
        matrix(self.uniform_matrix_3x4fv, symbol, location, 12, transpose, v);
    }

    pub fn uniform_matrix_4x2_f32_slice(&self, location: UniformLocation, transpose: bool, v: &[f32]) {
        let symbol = "glUniformMatrix4x2fv";
        matrix(self.uniform_matrix_4x2fv, symbol, location, 8, transpose, v);
    }

    pub fn uniform_matrix_4x3_f32_slice(&self, location: UniformLocation, transpose: bool, v: &[f32]) {
        let symbol = "glUniformMatrix4x3fv";
        matrix(self.uniform_matrix_4x3fv, symbol, location, 12, transpose, v);
    }

    pub fn uniform_matrix_2_f64_slice(&self, location: UniformLocation, transpose: bool, v: &[f64]) {
        let symbol = "glUniformMatrix2dv";
        matrix(self.uniform_matrix_2dv, symbol, location, 4, transpose, v);
    }

    pub fn uniform_matrix_3_f64_slice(&self, location: UniformLocation, transpose: bool, v: &[f64]) {
        let symbol = "glUniformMatrix3dv";
        matrix(self.uniform_matrix_3dv, symbol, location, 9, transpose, v);
    }

    pub fn uniform_matrix_4_f64_slice(&self, location: UniformLocation, transpose: bool, v: &[f64]) {
        let symbol = "glUniformMatrix4dv";
        matrix(self.uniform_matrix_4dv, symbol, location, 16, transpose, v);
    }

    pub fn uniform_matrix_2x3_f64_slice(&self, location: UniformLocation, transpose: bool, v: &[f64]) {
        let symbol = "glUniformMatrix2x3dv";
        matrix(self.uniform_matrix_2x3dv, symbol, location, 6, transpose, v);
    }

    pub fn uniform_matrix_2x4_f64_slice(&self, location: UniformLocation, transpose: bool, v: &[f64]) {
        let symbol = "glUniformMatrix2x4dv";
        matrix(self.uniform_matrix_2x4dv, symbol, location, 8, transpose, v);
    }

    pub fn uniform_matrix_3x2_f64_slice(&self, location: UniformLocation, transpose: bool, v: &[f64]) {
        let symbol = "glUniformMatrix3x2dv";
        matrix(self.uniform_matrix_3x2dv, symbol, location, 6, transpose, v);
    }

    pub fn uniform_matrix_3x4_f64_slice(&self, location: UniformLocation, transpose: bool, v: &[f64]) {
        let symbol = "glUniformMatrix3x4dv";
        matrix(self.uniform_matrix_3x4dv, symbol, location, 12, transpose, v);
    }

    pub fn uniform_matrix_4x2_f64_slice(&self, location: UniformLocation, transpose: bool, v: &[f64]) {
        let symbol = "glUniformMatrix4x2dv";
        matrix(self.uniform_matrix_4x2dv, symbol, location, 8, transpose, v);
    }

    pub fn uniform_matrix_4x3_f64_slice(&self, location: UniformLocation, transpose: bool, v: &[f64]) {
        let symbol = "glUniformMatrix4x3dv";
        matrix(self.uniform_matrix_4x3dv, symbol, location, 12, transpose, v);
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, ptr};

    use super::*;

    thread_local! {
        static CALLS: RefCell<Vec<(&'static str, i32, i32, u8, Vec<f64>)>> = RefCell::new(Vec::new());
    }

    unsafe extern "system" fn fake_uniform_1d(location: i32, x: f64) {
        CALLS.with(|c| c.borrow_mut().push(("1d", location, 1, 0, vec![x])));
    }

    unsafe extern "system" fn fake_uniform_3dv(location: i32, count: i32, value: *const f64) {
        let values = std::slice::from_raw_parts(value, 3 * count as usize).to_vec();
        CALLS.with(|c| c.borrow_mut().push(("3dv", location, count, 0, values)));
    }

    unsafe extern "system" fn fake_uniform_matrix_2x3dv(
        location: i32,
        count: i32,
        transpose: u8,
        value: *const f64,
    ) {
        let values = std::slice::from_raw_parts(value, 6 * count as usize).to_vec();
        CALLS.with(|c| {
            c.borrow_mut()
                .push(("2x3dv", location, count, transpose, values))
        });
    }

    fn loader(symbol: &str) -> *const c_void {
        match symbol {
            "glUniform1d" => fake_uniform_1d as *const c_void,
            "glUniform3dv" => fake_uniform_3dv as *const c_void,
            "glUniformMatrix2x3dv" => fake_uniform_matrix_2x3dv as *const c_void,
            _ => ptr::null(),
        }
    }

    fn take_calls() -> Vec<(&'static str, i32, i32, u8, Vec<f64>)> {
        CALLS.with(|c| c.take())
    }

    #[test]
    fn test_null_loader_loads_nothing() {
        let functions = unsafe { ExtendedFunctions::load(|_| ptr::null()) };

        assert!(!functions.supports_double_precision());
        assert!(matches!(
            functions.require("glUniform1d"),
            Err(Error::MissingFunction("glUniform1d"))
        ));
    }

    #[test]
    fn test_missing_function_is_skipped() {
        let functions = ExtendedFunctions::default();
        functions.uniform_1_f64(UniformLocation(0), 1.);
        functions.uniform_matrix_4_f64_slice(UniformLocation(0), false, &[0.; 16]);

        assert!(take_calls().is_empty());
    }

    #[test]
    fn test_loaded_functions_are_called() {
        let functions = unsafe { ExtendedFunctions::load(loader) };
        assert!(functions.require("glUniform3dv").is_ok());
        assert!(functions.require("glUniform2dv").is_err());
        assert!(functions.require("glNotAFunction").is_err());

        functions.uniform_1_f64(UniformLocation(2), 0.5);
        functions.uniform_3_f64_slice(UniformLocation(5), &[1., 2., 3.]);
        functions.uniform_matrix_2x3_f64_slice(UniformLocation(7), false, &[0.; 6]);
        functions.uniform_2_f64_slice(UniformLocation(9), &[1., 2.]);

        assert_eq!(
            take_calls(),
            vec![
                ("1d", 2, 1, 0, vec![0.5]),
                ("3dv", 5, 1, 0, vec![1., 2., 3.]),
                ("2x3dv", 7, 1, 0, vec![0.; 6]),
            ]
        );
    }
}
