mod md5;
mod sha256;
mod skein256;
