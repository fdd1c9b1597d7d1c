//! Common PSS sources for tests.

// Well-formed input: parses with the optimistic stage
pub const SIMPLE_COMPONENT: &str = "component C { }";

pub const PURE_TEMPLATE_COMPONENT: &str = "pure component C<type T, int N = 4> : base_c { }";

pub const REGISTER_BLOCK: &str = r#"
package regs_pkg {
    struct ctrl_s {
        bit[1] enable;
        bit[7] mode;
    }

    component ctrl_reg_c : reg_c<ctrl_s, READWRITE, 8> { }

    component dma_regs_c : reg_group_c<0x4000_0000> {
        reg_c<ctrl_s, READWRITE, 8> ctrl;
        reg_c<bit[32], READONLY, 32> status;
        reg_c<bit[32]> channel[4];
    }
}
"#;

// Needs full lookahead: dotted assignment and dotted call
pub const DOTTED_PROCEDURAL: &str = r#"
component top_c {
    dma_regs_c regs;

    exec init_down {
        int count = 2;
        regs.ctrl.write_val(1);
        regs.status_mask = 0xFF;
        configure(count, lookup(regs.base(), 4));
    }
}
"#;

pub const FUNCTIONS: &str = r#"
package util_pkg {
    target function int add(int a, int b = 1) {
        return a + b;
    }
    pure solve static function void reset();
    import function util_pkg::add;
}
"#;

// Recoverable errors: a missing semicolon and a stray token
pub const RECOVERABLE: &str = r#"
component broken_c {
    int x
}
component fine_c {
    42;
    rand bit[4] y;
}
"#;

// Not PSS at all
pub const GARBAGE: &str = "}}}} ;;;; ))) component { { {";

// Block and line comments between significant tokens
pub const COMMENTED: &str = r#"
/*
 * Copyright header
 * All rights reserved.
 */
component commented_c {
    /* field */ int x = /* c */ 5;
    int y = // initial
        7;
    exec body {
        f(a /* c */, b);
    }
}
"#;

/// `depth` parenthesised levels around a single literal in an assignment.
pub fn deeply_nested(depth: usize) -> String {
    format!(
        "component C {{ exec body {{ x = {}1{}; }} }}",
        "(".repeat(depth),
        ")".repeat(depth)
    )
}
