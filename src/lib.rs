pub mod prelude;
pub mod dsp{
    pub mod fir_response;
    pub mod filters{
        pub mod tunable_lowpass;
    }
}
