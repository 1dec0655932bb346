//! Reference programs.
//!
//! Register presets each program expects are noted beside it; R0 is an
//! ordinary register and starts undefined like every other one.

/// Two independent immediates. Needs `R0 = 0`.
pub const INDEPENDENT: &str = "
    ADDI R1 R0 5
    SUBI R3 R0 2
    EOP
";

/// `ADD` reads `R1` while `ADDI` is still producing it. Needs `R0 = 0`.
pub const RAW_HAZARD: &str = "
    ADDI R1 R0 5
    ADD  R2 R1 R1
    EOP
";

/// Store then load through `R1`. Needs `R0 = 0`, `R2` = data; `R1 = 0`
/// when stores are not hazard-checked.
pub const STORE_LOAD: &str = "
    ADDI R1 R0 0
    SW   R2 0(R1)
    LW   R3 0(R1)
    EOP
";

/// A taken branch to the `EOP`. Branches do not redirect fetch, so the
/// `ADDI` still executes. Needs `R0 = 0`.
pub const BRANCH_OVER: &str = "
        BEQZ R0 done
        ADDI R1 R0 7
done:   EOP
";
