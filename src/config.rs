pub const ROWS: usize = 6;
pub const COLS: usize = 7;
pub const CONNECT: usize = 4;
