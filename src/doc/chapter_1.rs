/*!
# The Machine and Its Opcodes

## Memory map

One zero-filled array of 30000 bytes holds everything. The regions
never move and never resize:

<pre><code>&nbsp;0100h  data stack, 128 bytes
&nbsp;0180h  return stack, 384 bytes
&nbsp;0300h  variables, a 2-byte cell per letter a..z
&nbsp;1000h  program text (change with --address)
&nbsp;9500h  highest address the program counter may reach
</code></pre>

Stacks and variables are ordinary memory, so `!` and `@` can reach
them, the program text included. A 16-bit value is always two bytes,
low byte first; on a stack the low byte is pushed first so the high
byte is on top.

The program counter starts at the load address and moves one character
at a time. If it ever leaves the range between the load address and
`9500h`, the machine stops with an `EMERGENCY BREAK`. The usual cause
is a reference to a label that does not exist ahead of it.

## Variables

A bare lowercase letter pushes the address of its cell. Variables are
not initialized; like all memory they start at zero.

## Opcodes

<pre><code>&nbsp;+   pop b, pop a, push a+b (16-bit, wrapping)
&nbsp;-   pop b, pop a, push a-b (16-bit, wrapping)
&nbsp;&gt;   pop a, push a/2
&nbsp;&lt;   pop a, push a*2 (wrapping)
&nbsp;?   pop target, pop cond; jump to target when cond is
&nbsp;    positive with bit 15 clear
&nbsp;&amp;   pop target, remember this spot on the return stack,
&nbsp;    jump to target
&nbsp;;   return to just after the remembered spot
&nbsp;:   declare a label; the next character names it
&nbsp;@   pop addr, push the byte at addr then the byte at addr+1
&nbsp;!   pop addr, pop value, store value at addr low byte first
&nbsp;#   comment to end of line
&nbsp;$   push the address just past label :x, where x is the
&nbsp;    next character
&nbsp;.   pop a value, emit its low byte
&nbsp;,   wait for one key, push its code
&nbsp;^   stop
</code></pre>

Any other character does nothing. That is what makes layout possible:
spaces survive loading only on label lines (and everywhere with
`--no-strip`), and the machine steps over them.

## Labels, found two ways

Normally `$x` scans memory forward from the reference, skipping
comments, and settles on the first `:x` it meets. The scan never looks
backward, so place shared labels after the code that refers to them. A
missed label runs the scan off the end of the program and into the
emergency break.

With `--link`, all labels are collected once before the run and every
`$x` is checked up front; a reference with no label is reported as
`UNDEFINED LABEL` before anything executes. Both ways agree on the
target: the byte immediately after the label pair.

## Errors

A program that pops more than it pushed stops with `STACK UNDERFLOW`.
Overfilling a stack region stops with `STACK OVERFLOW`. A fetch or
store outside the 30000 bytes stops with `ADDRESS OUT OF RANGE`. None
of these are recoverable; the machine halts where the error happened
and the offending address is reported.

*/
