#[cfg(not(target_arch = "wasm32"))]
macro_rules! maybe_par_chunks_mut {
    ($slice:expr, $size:expr) => {
        $slice.par_chunks_mut($size)
    };
}

#[cfg(target_arch = "wasm32")]
macro_rules! maybe_par_chunks_mut {
    ($slice:expr, $size:expr) => {
        $slice.chunks_mut($size)
    };
}
