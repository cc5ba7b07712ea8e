pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

pub fn is_master(value: u32) -> bool {
    MASTER_NUMBERS.contains(&value)
}

pub fn digit_sum(mut value: u32) -> u32 {
    let mut sum = 0;
    while value > 0 {
        sum += value % 10;
        value /= 10;
    }
    sum
}

/// Sums digits until one digit is left, stopping early on 11, 22 or 33.
///
/// Used by every attribute except the personal year.
pub fn reduce_keeping_masters(value: u32) -> u32 {
    reduce(value, true)
}

/// Sums digits until one digit is left. Master numbers are reduced too.
pub fn reduce_to_single_digit(value: u32) -> u32 {
    reduce(value, false)
}

fn reduce(mut value: u32, keep_masters: bool) -> u32 {
    if value == 0 {
        return 0;
    }
    if keep_masters && is_master(value) {
        return value;
    }
    while value > 9 {
        value = digit_sum(value);
        if keep_masters && is_master(value) {
            return value;
        }
    }
    value
}
