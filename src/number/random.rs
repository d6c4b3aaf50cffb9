use rand::Rng;

/// Uniform float in `[min, max)`, from the thread-local generator.
pub fn random_range(min: f64, max: f64) -> f64 {
    random_range_with(&mut rand::thread_rng(), min, max)
}

pub fn random_range_with<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    rng.gen::<f64>() * (max - min) + min
}

/// Uniform integer in `[ceil(min), floor(max)]`, both bounds inclusive.
pub fn random_int_range(min: f64, max: f64) -> f64 {
    random_int_range_with(&mut rand::thread_rng(), min, max)
}

pub fn random_int_range_with<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    let min = min.ceil();
    let max = max.floor();
    (rng.gen::<f64>() * (max - min + 1.0)).floor() + min
}
