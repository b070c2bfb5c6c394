pub static LEGACY_STRIDE_HELP: &str = "Advance rows without padding

Rows of a bitmap are padded to a multiple of 4 bytes. With this
flag the padding is computed but each row is assumed to start
right after the previous one, as the old C filter did. Bitmaps
with a negative height are still filtered as top-down images.";

pub static STREAM_HELP: &str = "Read standard input to its end instead of seeking

By default the input size is found by seeking to the end of
standard input, which fails for pipes. Stream mode reads until
end of file and works with any input.";

pub static EXIT_CODES_HELP: &str = "Exit codes:
  0  success
  1  bad number of arguments
  2  seek failure
  3  read failure
  4  allocation failure
  5  write failure
  6  bitmap could not be filtered";
