//! Fixed mnemonic table indexed by opcode.
//!
//! Used by the trace line and by the illegal-opcode error for diagnostics;
//! nothing here affects execution. `#` marks an immediate byte operand,
//! `$` an immediate address, `p` a port number and `M` the memory operand
//! addressed through HL. Undocumented encodings are listed as `ill`.

/// One mnemonic per opcode value.
#[rustfmt::skip]
pub const MNEMONICS: [&str; 256] = [
    // 0x00
    "nop", "lxi b,#", "stax b", "inx b", "inr b", "dcr b", "mvi b,#", "rlc",
    "ill", "dad b", "ldax b", "dcx b", "inr c", "dcr c", "mvi c,#", "rrc",
    // 0x10
    "ill", "lxi d,#", "stax d", "inx d", "inr d", "dcr d", "mvi d,#", "ral",
    "ill", "dad d", "ldax d", "dcx d", "inr e", "dcr e", "mvi e,#", "rar",
    // 0x20
    "ill", "lxi h,#", "shld", "inx h", "inr h", "dcr h", "mvi h,#", "daa",
    "ill", "dad h", "lhld", "dcx h", "inr l", "dcr l", "mvi l,#", "cma",
    // 0x30
    "ill", "lxi sp,#", "sta $", "inx sp", "inr M", "dcr M", "mvi M,#", "stc",
    "ill", "dad sp", "lda $", "dcx sp", "inr a", "dcr a", "mvi a,#", "cmc",
    // 0x40
    "mov b,b", "mov b,c", "mov b,d", "mov b,e", "mov b,h", "mov b,l", "mov b,M", "mov b,a",
    "mov c,b", "mov c,c", "mov c,d", "mov c,e", "mov c,h", "mov c,l", "mov c,M", "mov c,a",
    // 0x50
    "mov d,b", "mov d,c", "mov d,d", "mov d,e", "mov d,h", "mov d,l", "mov d,M", "mov d,a",
    "mov e,b", "mov e,c", "mov e,d", "mov e,e", "mov e,h", "mov e,l", "mov e,M", "mov e,a",
    // 0x60
    "mov h,b", "mov h,c", "mov h,d", "mov h,e", "mov h,h", "mov h,l", "mov h,M", "mov h,a",
    "mov l,b", "mov l,c", "mov l,d", "mov l,e", "mov l,h", "mov l,l", "mov l,M", "mov l,a",
    // 0x70
    "mov M,b", "mov M,c", "mov M,d", "mov M,e", "mov M,h", "mov M,l", "hlt", "mov M,a",
    "mov a,b", "mov a,c", "mov a,d", "mov a,e", "mov a,h", "mov a,l", "mov a,M", "mov a,a",
    // 0x80
    "add b", "add c", "add d", "add e", "add h", "add l", "add M", "add a",
    "adc b", "adc c", "adc d", "adc e", "adc h", "adc l", "adc M", "adc a",
    // 0x90
    "sub b", "sub c", "sub d", "sub e", "sub h", "sub l", "sub M", "sub a",
    "sbb b", "sbb c", "sbb d", "sbb e", "sbb h", "sbb l", "sbb M", "sbb a",
    // 0xA0
    "ana b", "ana c", "ana d", "ana e", "ana h", "ana l", "ana M", "ana a",
    "xra b", "xra c", "xra d", "xra e", "xra h", "xra l", "xra M", "xra a",
    // 0xB0
    "ora b", "ora c", "ora d", "ora e", "ora h", "ora l", "ora M", "ora a",
    "cmp b", "cmp c", "cmp d", "cmp e", "cmp h", "cmp l", "cmp M", "cmp a",
    // 0xC0
    "rnz", "pop b", "jnz $", "jmp $", "cnz $", "push b", "adi #", "rst 0",
    "rz", "ret", "jz $", "ill", "cz $", "call $", "aci #", "rst 1",
    // 0xD0
    "rnc", "pop d", "jnc $", "out p", "cnc $", "push d", "sui #", "rst 2",
    "rc", "ill", "jc $", "in p", "cc $", "ill", "sbi #", "rst 3",
    // 0xE0
    "rpo", "pop h", "jpo $", "xthl", "cpo $", "push h", "ani #", "rst 4",
    "rpe", "pchl", "jpe $", "xchg", "cpe $", "ill", "xri #", "rst 5",
    // 0xF0
    "rp", "pop psw", "jp $", "di", "cp $", "push psw", "ori #", "rst 6",
    "rm", "sphl", "jm $", "ei", "cm $", "ill", "cpi #", "rst 7",
];
