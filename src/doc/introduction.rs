/*!
# Introductory Tutorial for Lox Expressions

Run the executable with no arguments to get a prompt. Type CTRL-D to exit.
<pre><code>&nbsp;> █
</code></pre>

Every line you enter is one expression. It is compiled to bytecode and
run right away, and the result is printed.

<pre><code>&nbsp;> 1 + 2 * 3
&nbsp;  7
&nbsp;> (1 + 2) * 3
&nbsp;  9
</code></pre>

## Values

There are four kinds of value. Numbers are double precision floats
written as `12` or `3.25`; there is no exponent form and no leading dot.
Strings are written between double quotes and may span lines. The
literals `true`, `false` and `nil` stand for themselves.

## Operators

From loosest to tightest binding:

| Operators | Meaning |
|-----------|---------|
| `==` `!=` | equality, any two values |
| `<` `<=` `>` `>=` | comparison, numbers only |
| `+` `-` | addition and subtraction; `+` also joins two strings |
| `*` `/` | multiplication and division |
| `!` `-` | logical not, numeric negation |

Binary operators group to the left, so `8 - 4 - 2` is `2`.
Values of different kinds are never equal: `0 == false` is `false`.

Only `nil` and `false` count as false for `!`. Zero and the empty string
are both true, so `!0` and `!""` are `false`.

## Errors

Mistakes in the text are reported before anything runs:
<pre><code>&nbsp;> (1 + 2
&nbsp;  [line 1] Error at end: Expect ')' after expression.
</code></pre>

Mistakes in the values are reported while running:
<pre><code>&nbsp;> -"abc"
&nbsp;  Operand must be a number.
&nbsp;  [line 1] in script
</code></pre>

Expressions are limited in how deep they nest. Too many prefix operators
or parentheses are reported by the compiler as
`Expression nested too deeply.`; an expression that needs more stack
slots than the machine has stops with `Stack overflow.`. Either way the
prompt stays up and the next line runs normally.

## Looking inside

Start with `--disassemble` to see the bytecode for each line, or with
`--trace` to watch the stack as every instruction executes.
<pre><code>&nbsp;> 1 >= 2
&nbsp;  == code ==
&nbsp;  0000    1 OP_CONSTANT         0 '1'
&nbsp;  0002    | OP_CONSTANT         1 '2'
&nbsp;  0004    | OP_LESS
&nbsp;  0005    | OP_NOT
&nbsp;  0006    | OP_RETURN
&nbsp;  false
</code></pre>

*/
