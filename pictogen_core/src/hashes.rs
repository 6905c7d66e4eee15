use md5::{Digest, Md5};

pub fn md5(input: &[u8]) -> [u8; 16] {
    Md5::digest(input).into()
}
