const UNITS: [&str; 7] = ["B", "kB", "MB", "GB", "TB", "PB", "EB"];

/// SI-scaled size string, e.g. `100 B`, `1.0 kB`, `12 MB`.
pub fn bytes(n: u64) -> String {
    if n < 10 {
        return format!("{n} B");
    }
    let mut exp = 0;
    let mut div = 1u64;
    while exp < UNITS.len() - 1 && n / div >= 1000 {
        div *= 1000;
        exp += 1;
    }
    let round = |div: u64| ((n as f64 / div as f64) * 10.0 + 0.5).floor() / 10.0;
    let mut val = round(div);
    // 999_950 rounds up to 1000 kB; show it as 1.0 MB
    if val >= 1000.0 && exp < UNITS.len() - 1 {
        div *= 1000;
        exp += 1;
        val = round(div);
    }
    if val < 10.0 {
        format!("{val:.1} {}", UNITS[exp])
    } else {
        format!("{val:.0} {}", UNITS[exp])
    }
}
