// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

pub const SIGNATURE_LENGTH: usize = 4;

// Local file header constants
//
// https://pkware.cachefly.net/webdocs/casestudies/APPNOTE.TXT (4.3.7)
pub const LFH_SIGNATURE: u32 = 0x4034b50;
pub const LFH_LENGTH: usize = 26;

// Central directory header constants
//
// https://pkware.cachefly.net/webdocs/casestudies/APPNOTE.TXT (4.3.12)
pub const CDH_SIGNATURE: u32 = 0x2014b50;
pub const CDH_LENGTH: usize = 42;

// End of central directory record constants
//
// https://pkware.cachefly.net/webdocs/casestudies/APPNOTE.TXT (4.3.16)
pub const EOCDR_SIGNATURE: u32 = 0x6054b50;
pub const EOCDR_LENGTH: usize = 18;

// Version 2.0, MS-DOS host.
//
// https://pkware.cachefly.net/webdocs/casestudies/APPNOTE.TXT (4.4.2, 4.4.3)
pub const VERSION_NEEDED: u16 = 20;
pub const VERSION_MADE_BY: u16 = 20;

