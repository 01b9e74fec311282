use ndarray::prelude::*;

pub type R1D = Array1<f64>;
pub type VR1D<'a> = ArrayView1<'a,f64>;

pub type R2D = Array2<f64>;
pub type VR2D<'a> = ArrayView2<'a,f64>;

#[derive(Debug)]
pub enum ErrorsTLPF{
    IncompatibleArraySizes((usize,usize)),
    InvalidInputRange(&'static str),
    RuntimeError(&'static str)
}
