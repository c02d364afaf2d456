pub struct Error {
    code: u16,
    address: Option<usize>,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, @$addr:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).at_address($addr)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, @$addr:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .at_address($addr)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            address: None,
            message: String::new(),
        }
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn address(&self) -> Option<usize> {
        self.address
    }

    pub fn at_address(mut self, address: usize) -> Error {
        debug_assert!(self.address.is_none());
        self.address = Some(address);
        self
    }

    pub fn message<S: Into<String>>(mut self, message: S) -> Error {
        debug_assert!(self.message.is_empty());
        self.message = message.into();
        self
    }
}

pub enum ErrorCode {
    Break = 1,
    StackUnderflow = 2,
    StackOverflow = 3,
    EmergencyBreak = 4,
    UndefinedLabel = 5,
    AddressOutOfRange = 6,
    OutOfMemory = 7,
    InternalError = 51,
    FileNotFound = 53,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            1 => "BREAK",
            2 => "STACK UNDERFLOW",
            3 => "STACK OVERFLOW",
            4 => "EMERGENCY BREAK",
            5 => "UNDEFINED LABEL",
            6 => "ADDRESS OUT OF RANGE",
            7 => "OUT OF MEMORY",
            51 => "INTERNAL ERROR",
            53 => "FILE NOT FOUND",
            _ => "",
        };
        let mut suffix = String::new();
        if let Some(address) = self.address {
            suffix.push_str(&format!(" AT {:04X}h", address));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        if code_str.is_empty() {
            write!(f, "PROGRAM ERROR {}{}", self.code, suffix)
        } else {
            write!(f, "{}{}", code_str, suffix)
        }
    }
}
