/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Loading the input into one buffer and writing it back out

use std::fs::File;
use std::io::{self, ErrorKind, Read, Seek, SeekFrom, Write};

use log::{debug, trace};

use crate::errors::FilterAppErrors;

const STREAM_CHUNK: usize = 1 << 16;

fn empty_input() -> FilterAppErrors {
    FilterAppErrors::Read(io::Error::new(ErrorKind::UnexpectedEof, "input is empty"))
}

/// Read all of `reader` into a buffer sized by seeking to its end
///
/// # Errors
/// - [`FilterAppErrors::Seek`] if the size cannot be determined,
///   e.g. the input is a pipe
/// - [`FilterAppErrors::Allocation`] if the buffer cannot be reserved
/// - [`FilterAppErrors::Read`] on a short read or an empty input
pub fn read_seekable<R: Read + Seek>(reader: &mut R) -> Result<Vec<u8>, FilterAppErrors> {
    reader.rewind().map_err(FilterAppErrors::Seek)?;
    let size = reader
        .seek(SeekFrom::End(0))
        .map_err(FilterAppErrors::Seek)?;
    reader.rewind().map_err(FilterAppErrors::Seek)?;

    let size = usize::try_from(size).map_err(|_| FilterAppErrors::Allocation(usize::MAX))?;
    debug!("Input is {} bytes", size);

    if size == 0 {
        return Err(empty_input());
    }
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(size)
        .map_err(|_| FilterAppErrors::Allocation(size))?;
    buffer.resize(size, 0);

    reader
        .read_exact(&mut buffer)
        .map_err(FilterAppErrors::Read)?;

    Ok(buffer)
}

/// Read `reader` until end of file
///
/// An input with no bytes at all is [`FilterAppErrors::Read`].
pub fn read_stream<R: Read>(reader: &mut R) -> Result<Vec<u8>, FilterAppErrors> {
    let mut buffer = Vec::new();
    let mut chunk = vec![0_u8; STREAM_CHUNK];

    loop {
        let read = match reader.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(FilterAppErrors::Read(e))
        };
        buffer
            .try_reserve(read)
            .map_err(|_| FilterAppErrors::Allocation(buffer.len().saturating_add(read)))?;
        buffer.extend_from_slice(&chunk[..read]);
        trace!("Read {} bytes, {} total", read, buffer.len());
    }
    debug!("Input is {} bytes", buffer.len());

    if buffer.is_empty() {
        return Err(empty_input());
    }
    Ok(buffer)
}

/// Write the whole buffer in one go and flush
pub fn write_buffer<W: Write>(writer: &mut W, buffer: &[u8]) -> Result<(), FilterAppErrors> {
    writer.write_all(buffer).map_err(FilterAppErrors::Write)?;
    writer.flush().map_err(FilterAppErrors::Write)?;

    debug!("Wrote {} bytes", buffer.len());
    Ok(())
}

/// A seekable handle to standard input
///
/// Standard input is duplicated into a [`File`] so it can be
/// seeked when it refers to a regular file.
#[cfg(unix)]
pub fn stdin_file() -> io::Result<File> {
    use std::os::fd::AsFd;

    let fd = io::stdin().as_fd().try_clone_to_owned()?;
    Ok(File::from(fd))
}

#[cfg(windows)]
pub fn stdin_file() -> io::Result<File> {
    use std::os::windows::io::AsHandle;

    let handle = io::stdin().as_handle().try_clone_to_owned()?;
    Ok(File::from(handle))
}

#[cfg(not(any(unix, windows)))]
pub fn stdin_file() -> io::Result<File> {
    Err(io::Error::new(
        ErrorKind::Unsupported,
        "standard input cannot be seeked on this platform, use --stream"
    ))
}
