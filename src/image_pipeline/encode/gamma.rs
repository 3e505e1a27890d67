//! Display gamma applied to every output sample.

/// Maps a linear 8-bit sensor value to its gamma 1.7 display value.
///
/// Non-decreasing, with `GAMMA[0] == 0` and `GAMMA[255] == 255`.
#[rustfmt::skip]
pub const GAMMA: [u8; 256] = [
      0,  10,  15,  19,  22,  25,  28,  31,  33,  36,  38,  40,  42,  44,  46,  48,
     50,  52,  54,  55,  57,  59,  60,  62,  64,  65,  67,  68,  70,  71,  72,  74,
     75,  77,  78,  79,  81,  82,  83,  84,  86,  87,  88,  89,  91,  92,  93,  94,
     95,  97,  98,  99, 100, 101, 102, 103, 105, 106, 107, 108, 109, 110, 111, 112,
    113, 114, 115, 116, 117, 118, 119, 120, 121, 122, 123, 124, 125, 126, 127, 128,
    129, 130, 131, 132, 133, 134, 135, 135, 136, 137, 138, 139, 140, 141, 142, 143,
    144, 144, 145, 146, 147, 148, 149, 150, 150, 151, 152, 153, 154, 155, 156, 156,
    157, 158, 159, 160, 160, 161, 162, 163, 164, 164, 165, 166, 167, 168, 168, 169,
    170, 171, 172, 172, 173, 174, 175, 175, 176, 177, 178, 178, 179, 180, 181, 181,
    182, 183, 184, 184, 185, 186, 187, 187, 188, 189, 190, 190, 191, 192, 192, 193,
    194, 195, 195, 196, 197, 197, 198, 199, 199, 200, 201, 202, 202, 203, 204, 204,
    205, 206, 206, 207, 208, 208, 209, 210, 210, 211, 212, 212, 213, 214, 214, 215,
    216, 216, 217, 218, 218, 219, 220, 220, 221, 222, 222, 223, 224, 224, 225, 226,
    226, 227, 227, 228, 229, 229, 230, 231, 231, 232, 233, 233, 234, 234, 235, 236,
    236, 237, 238, 238, 239, 239, 240, 241, 241, 242, 242, 243, 244, 244, 245, 245,
    246, 247, 247, 248, 248, 249, 250, 250, 251, 251, 252, 253, 253, 254, 254, 255,
];

#[inline]
pub fn gamma_correct(value: u8) -> u8 {
    GAMMA[value as usize]
}
